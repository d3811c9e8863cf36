use std::fmt;

use crate::error::{Result, SwarmError};

/// Fixed length coordinate container every spatial quantity is built on.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    coordinates: Vec<f64>,
}

impl Vector {
    pub fn new(dimensions: usize) -> Vector {
        Vector {
            coordinates: vec![0.0; dimensions],
        }
    }

    pub fn dimensions(&self) -> usize {
        self.coordinates.len()
    }

    /// Borrow the current values. Copy them if they have to outlive the next mutation.
    pub fn get_coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Replace every coordinate at once, the length can never change.
    pub fn set_coordinates(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.coordinates.len() {
            return Err(SwarmError::DimensionMismatch {
                expected: self.coordinates.len(),
                found: values.len(),
            });
        }
        self.coordinates.copy_from_slice(values);
        Ok(())
    }

    pub(crate) fn coordinates_mut(&mut self) -> &mut [f64] {
        &mut self.coordinates
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.coordinates)
    }
}

/// Structural base shared by position, velocity and heuristic storage.
pub trait VectorLike {
    fn vector(&self) -> &Vector;
    fn vector_mut(&mut self) -> &mut Vector;

    fn dimensions(&self) -> usize {
        self.vector().dimensions()
    }

    fn get_coordinates(&self) -> &[f64] {
        self.vector().get_coordinates()
    }

    fn set_coordinates(&mut self, values: &[f64]) -> Result<()> {
        self.vector_mut().set_coordinates(values)
    }
}

impl VectorLike for Vector {
    fn vector(&self) -> &Vector {
        self
    }

    fn vector_mut(&mut self) -> &mut Vector {
        self
    }
}

/// Clamp into `[-bound, bound]` with min/max, never wrapping around.
pub fn clamp(value: f64, bound: f64) -> f64 {
    value.min(bound).max(-bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let v = Vector::new(4);
        assert_eq!(v.dimensions(), 4);
        assert_eq!(v.get_coordinates(), &[0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_set_coordinates() {
        let mut v = Vector::new(2);
        v.set_coordinates(&[1.5, -2.0]).unwrap();
        assert_eq!(v.get_coordinates(), &[1.5, -2.0]);
    }

    #[test]
    fn test_set_coordinates_mismatch() {
        let mut v = Vector::new(3);
        let err = v.set_coordinates(&[1.0, 2.0]).unwrap_err();

        assert_eq!(
            err,
            SwarmError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
        // untouched on failure
        assert_eq!(v.get_coordinates(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(12.0, 10.0), 10.0);
        assert_eq!(clamp(-12.0, 10.0), -10.0);
        assert_eq!(clamp(3.3, 10.0), 3.3);
    }
}
