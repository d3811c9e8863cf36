use crate::vector::{clamp, Vector, VectorLike};

pub const DEFAULT_VELOCITY_BOUND: f64 = 5.0;

/// Per dimension step size. Clamped to `[-bound, bound]` once recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Velocity {
    vector: Vector,
    bound: f64,
}

impl Velocity {
    pub fn new(dimensions: usize) -> Velocity {
        Velocity::with_bound(dimensions, DEFAULT_VELOCITY_BOUND)
    }

    pub fn with_bound(dimensions: usize, bound: f64) -> Velocity {
        Velocity {
            vector: Vector::new(dimensions),
            bound: bound.abs(),
        }
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    pub fn clamp(&mut self) {
        let bound = self.bound;
        self.vector
            .coordinates_mut()
            .iter_mut()
            .for_each(|v| *v = clamp(*v, bound));
    }

    pub(crate) fn coordinates_mut(&mut self) -> &mut [f64] {
        self.vector.coordinates_mut()
    }
}

impl VectorLike for Velocity {
    fn vector(&self) -> &Vector {
        &self.vector
    }

    fn vector_mut(&mut self) -> &mut Vector {
        &mut self.vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let mut v = Velocity::new(3);
        v.set_coordinates(&[7.0, -5.5, 1.25]).unwrap();
        v.clamp();
        assert_eq!(v.get_coordinates(), &[5.0, -5.0, 1.25]);
    }
}
