use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::{
    position::Position,
    vector::{Vector, VectorLike},
};

/// The fixed set of functions the swarm can minimize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Objective {
    /// `Σ xᵢ²`
    #[default]
    SumOfSquares,
    /// Rastrigin over the first two coordinates only.
    Rastrigin2D,
    /// Goldstein-Price, minimum 3 at (0, -1).
    GoldsteinPrice2D,
    /// Booth, minimum 0 at (1, 3).
    Booth2D,
}

impl Objective {
    /// "1" to "4". Anything else falls back to the sum of squares.
    pub fn from_selector(selector: &str) -> Objective {
        match selector.trim() {
            "2" => Objective::Rastrigin2D,
            "3" => Objective::GoldsteinPrice2D,
            "4" => Objective::Booth2D,
            _ => Objective::SumOfSquares,
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            Objective::SumOfSquares => "1",
            Objective::Rastrigin2D => "2",
            Objective::GoldsteinPrice2D => "3",
            Objective::Booth2D => "4",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Objective::SumOfSquares => "Sum of squares",
            Objective::Rastrigin2D => "Rastrigin",
            Objective::GoldsteinPrice2D => "Goldstein-Price",
            Objective::Booth2D => "Booth",
        }
    }

    pub fn evaluate(&self, coordinates: &[f64]) -> f64 {
        // the 2-D functions ignore anything past the second coordinate
        let x = coordinates.first().copied().unwrap_or(0.0);
        let y = coordinates.get(1).copied().unwrap_or(0.0);

        match self {
            Objective::SumOfSquares => coordinates.iter().map(|c| c * c).sum(),
            Objective::Rastrigin2D => {
                20.0 + [x, y]
                    .iter()
                    .map(|c| c * c - 10.0 * (2.0 * PI * c).cos())
                    .sum::<f64>()
            }
            Objective::GoldsteinPrice2D => {
                (1.0 + (x + y + 1.0).powi(2)
                    * (19.0 - 14.0 * x + 3.0 * x.powi(2) - 14.0 * y
                        + 6.0 * x * y
                        + 3.0 * y.powi(2)))
                    * (30.0
                        + (2.0 * x - 3.0 * y).powi(2)
                            * (18.0 - 32.0 * x + 12.0 * x.powi(2) + 48.0 * y - 36.0 * x * y
                                + 27.0 * y.powi(2)))
            }
            Objective::Booth2D => (x + 2.0 * y - 7.0).powi(2) + (2.0 * x + y - 5.0).powi(2),
        }
    }
}

impl From<String> for Objective {
    fn from(selector: String) -> Self {
        Objective::from_selector(&selector)
    }
}

impl From<Objective> for String {
    fn from(objective: Objective) -> Self {
        objective.selector().to_string()
    }
}

/// Objective value storage of a particle.
///
/// Holds one slot per dimension plus a trailing scalar slot. Only the
/// trailing slot (index D) is ever written or compared, the others stay 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Heuristic {
    vector: Vector,
    objective: Objective,
}

impl Heuristic {
    pub fn new(dimensions: usize, objective: Objective) -> Heuristic {
        Heuristic {
            vector: Vector::new(dimensions + 1),
            objective,
        }
    }

    pub fn get_heuristic_f(&self) -> Objective {
        self.objective
    }

    /// Recompute the scalar slot from `position`.
    pub fn update(&mut self, position: &Position) {
        let value = self.objective.evaluate(position.get_coordinates());
        if let Some(slot) = self.vector.coordinates_mut().last_mut() {
            *slot = value;
        }
    }

    pub fn value(&self) -> f64 {
        self.vector
            .get_coordinates()
            .last()
            .copied()
            .unwrap_or(f64::MAX)
    }
}

impl VectorLike for Heuristic {
    fn vector(&self) -> &Vector {
        &self.vector
    }

    fn vector_mut(&mut self) -> &mut Vector {
        &mut self.vector
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_from_selector() {
        assert_eq!(Objective::from_selector("1"), Objective::SumOfSquares);
        assert_eq!(Objective::from_selector("2"), Objective::Rastrigin2D);
        assert_eq!(Objective::from_selector("3"), Objective::GoldsteinPrice2D);
        assert_eq!(Objective::from_selector("4"), Objective::Booth2D);
        assert_eq!(Objective::from_selector(""), Objective::SumOfSquares);
        assert_eq!(Objective::from_selector("rosenbrock"), Objective::SumOfSquares);
    }

    #[test]
    fn test_known_minima() {
        assert_eq!(Objective::SumOfSquares.evaluate(&[0.0, 0.0, 0.0]), 0.0);
        assert!(approx_eq!(
            f64,
            Objective::Rastrigin2D.evaluate(&[0.0, 0.0]),
            0.0,
            epsilon = 1e-12
        ));
        assert!(approx_eq!(
            f64,
            Objective::GoldsteinPrice2D.evaluate(&[0.0, -1.0]),
            3.0,
            epsilon = 1e-12
        ));
        assert_eq!(Objective::Booth2D.evaluate(&[1.0, 3.0]), 0.0);
    }

    #[test]
    fn test_sum_of_squares() {
        assert_eq!(Objective::SumOfSquares.evaluate(&[1.0, -2.0, 3.0]), 14.0);
    }

    #[test]
    fn test_two_dimensional_functions_ignore_extra_coordinates() {
        for objective in [
            Objective::Rastrigin2D,
            Objective::GoldsteinPrice2D,
            Objective::Booth2D,
        ] {
            assert_eq!(
                objective.evaluate(&[0.5, 1.5]),
                objective.evaluate(&[0.5, 1.5, 9.0, -7.0])
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let point = [1.25, -0.75, 3.0];
        for objective in [
            Objective::SumOfSquares,
            Objective::Rastrigin2D,
            Objective::GoldsteinPrice2D,
            Objective::Booth2D,
        ] {
            let first = objective.evaluate(&point);
            for _ in 0..10 {
                assert_eq!(objective.evaluate(&point), first);
            }
        }
    }

    #[test]
    fn test_one_dimensional_input_reads_zero() {
        // y missing -> 0
        assert_eq!(
            Objective::Booth2D.evaluate(&[1.0]),
            Objective::Booth2D.evaluate(&[1.0, 0.0])
        );
    }

    #[test]
    fn test_heuristic_update() {
        let mut position = Position::new(2);
        position.set_coordinates(&[1.0, 3.0]).unwrap();
        let mut h = Heuristic::new(2, Objective::Booth2D);
        assert_eq!(h.dimensions(), 3);

        h.update(&position);
        assert_eq!(h.value(), 0.0);

        position.set_coordinates(&[0.0, 0.0]).unwrap();
        h.update(&position);
        assert_eq!(h.value(), 74.0);
        // reserved slots are never written
        assert_eq!(&h.get_coordinates()[..2], &[0.0, 0.0]);
    }

    #[test]
    fn test_serde_selector() {
        let o: Objective = String::from("3").into();
        assert_eq!(o, Objective::GoldsteinPrice2D);
        assert_eq!(String::from(Objective::Booth2D), "4");
    }
}
