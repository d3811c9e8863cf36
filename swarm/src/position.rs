use std::fmt;

use crate::{
    error::{Result, SwarmError},
    vector::{clamp, Vector, VectorLike},
    velocity::Velocity,
};

pub const DEFAULT_POSITION_BOUND: f64 = 10.0;

/// A candidate solution, kept inside `[-bound, bound]` after every update.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    vector: Vector,
    bound: f64,
}

impl Position {
    pub fn new(dimensions: usize) -> Position {
        Position::with_bound(dimensions, DEFAULT_POSITION_BOUND)
    }

    pub fn with_bound(dimensions: usize, bound: f64) -> Position {
        Position {
            vector: Vector::new(dimensions),
            bound: bound.abs(),
        }
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Integrate the velocity into the position, then clamp.
    pub fn update(&mut self, velocity: &Velocity) -> Result<()> {
        if velocity.dimensions() != self.dimensions() {
            return Err(SwarmError::DimensionMismatch {
                expected: self.dimensions(),
                found: velocity.dimensions(),
            });
        }

        let bound = self.bound;
        self.vector
            .coordinates_mut()
            .iter_mut()
            .zip(velocity.get_coordinates().iter())
            .for_each(|(x, v)| {
                *x = clamp(*x + v, bound);
            });
        Ok(())
    }
}

impl VectorLike for Position {
    fn vector(&self) -> &Vector {
        &self.vector
    }

    fn vector_mut(&mut self) -> &mut Vector {
        &mut self.vector
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vector, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update() {
        let mut p = Position::new(2);
        p.set_coordinates(&[1.0, 1.0]).unwrap();
        let mut v = Velocity::new(2);
        v.set_coordinates(&[0.5, -2.0]).unwrap();

        p.update(&v).unwrap();
        assert_eq!(p.get_coordinates(), &[1.5, -1.0]);
    }

    #[test]
    fn test_update_clamps() {
        let mut p = Position::new(3);
        p.set_coordinates(&[9.0, -9.0, 0.0]).unwrap();
        let mut v = Velocity::with_bound(3, 50.0);
        v.set_coordinates(&[5.0, -5.0, 42.0]).unwrap();

        p.update(&v).unwrap();
        assert_eq!(p.get_coordinates(), &[10.0, -10.0, 10.0]);
    }

    #[test]
    fn test_update_mismatch() {
        let mut p = Position::new(3);
        let v = Velocity::new(2);
        assert!(p.update(&v).is_err());
    }
}
