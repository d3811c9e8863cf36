use rand::{distributions::Uniform, prelude::Distribution, Rng};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SwarmError},
    heuristic::{Heuristic, Objective},
    position::{Position, DEFAULT_POSITION_BOUND},
    vector::VectorLike,
    velocity::{Velocity, DEFAULT_VELOCITY_BOUND},
};

/// Weights of the velocity update equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub inertia: f64,
    pub cognitive: f64,
    pub social: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Coefficients {
            inertia: 0.7,
            cognitive: 2.05,
            social: 2.05,
        }
    }
}

/// Symmetric clamp ranges for positions and velocities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub position: f64,
    pub velocity: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            position: DEFAULT_POSITION_BOUND,
            velocity: DEFAULT_VELOCITY_BOUND,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    position: Position,
    velocity: Velocity,
    heuristic: Heuristic,
    pbest: Position,
}

impl Particle {
    /// Zeroed particle, see [`Particle::initialize_randomly`].
    pub fn new(dimensions: usize, objective: Objective, bounds: Bounds) -> Particle {
        Particle {
            position: Position::with_bound(dimensions, bounds.position),
            velocity: Velocity::with_bound(dimensions, bounds.velocity),
            heuristic: Heuristic::new(dimensions, objective),
            pbest: Position::with_bound(dimensions, bounds.position),
        }
    }

    /// Draw position and velocity uniformly from `[-bound, bound]`, then reset pbest.
    pub fn initialize_randomly<R: Rng + ?Sized>(&mut self, bound: f64, rng: &mut R) {
        let bound = bound.abs();
        let dist = Uniform::from(-bound..=bound);

        self.position
            .vector_mut()
            .coordinates_mut()
            .iter_mut()
            .for_each(|x| *x = dist.sample(rng));
        self.velocity
            .coordinates_mut()
            .iter_mut()
            .for_each(|v| *v = dist.sample(rng));

        self.heuristic.update(&self.position);
        self.pbest = self.position.clone();
    }

    /// `v = w*v + c1*r1*(pbest - x) + c2*r2*(gbest - x)`, clamped afterwards.
    ///
    /// `r1` and `r2` are drawn fresh for every dimension.
    pub fn update_velocity<R: Rng + ?Sized>(
        &mut self,
        gbest: &Position,
        coefficients: &Coefficients,
        rng: &mut R,
    ) -> Result<()> {
        if gbest.dimensions() != self.position.dimensions() {
            return Err(SwarmError::DimensionMismatch {
                expected: self.position.dimensions(),
                found: gbest.dimensions(),
            });
        }

        let dist = Uniform::from(0.0..1.0);
        let Coefficients {
            inertia: w,
            cognitive: c1,
            social: c2,
        } = *coefficients;

        self.velocity
            .coordinates_mut()
            .iter_mut()
            .zip(
                self.position.get_coordinates().iter().zip(
                    self.pbest
                        .get_coordinates()
                        .iter()
                        .zip(gbest.get_coordinates().iter()),
                ),
            )
            .for_each(|(v, (x, (x_pb, x_gb)))| {
                let r1 = dist.sample(rng);
                let r2 = dist.sample(rng);
                *v = w * *v + c1 * r1 * (*x_pb - *x) + c2 * r2 * (*x_gb - *x);
            });
        self.velocity.clamp();
        Ok(())
    }

    /// Move by the current velocity and re-evaluate the objective.
    pub fn update_position(&mut self) -> Result<()> {
        self.position.update(&self.velocity)?;
        self.heuristic.update(&self.position);
        Ok(())
    }

    /// Keep the current position as pbest only if strictly better.
    pub fn update_pbest(&mut self) {
        if self.heuristic_value() < self.pbest_value() {
            self.pbest = self.position.clone();
        }
    }

    /// One full iteration step against a fixed `gbest`.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        gbest: &Position,
        coefficients: &Coefficients,
        rng: &mut R,
    ) -> Result<()> {
        self.update_velocity(gbest, coefficients, rng)?;
        self.update_position()?;
        self.update_pbest();
        Ok(())
    }

    pub fn heuristic_value(&self) -> f64 {
        self.heuristic.value()
    }

    pub fn pbest_value(&self) -> f64 {
        self.heuristic
            .get_heuristic_f()
            .evaluate(self.pbest.get_coordinates())
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_velocity(&self) -> &Velocity {
        &self.velocity
    }

    pub fn get_heuristic(&self) -> &Heuristic {
        &self.heuristic
    }

    pub fn get_pbest(&self) -> &Position {
        &self.pbest
    }

    /// Overwrite the position and refresh the objective value. pbest is left alone.
    pub fn move_to(&mut self, coordinates: &[f64]) -> Result<()> {
        self.position.set_coordinates(coordinates)?;
        self.heuristic.update(&self.position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn particle(dimensions: usize) -> Particle {
        Particle::new(dimensions, Objective::SumOfSquares, Bounds::default())
    }

    #[test]
    fn test_new_dimensions() {
        for d in 1..6 {
            let p = particle(d);
            assert_eq!(p.get_position().dimensions(), d);
            assert_eq!(p.get_velocity().dimensions(), d);
            assert_eq!(p.get_pbest().dimensions(), d);
            assert_eq!(p.get_heuristic().dimensions(), d + 1);
        }
    }

    #[test]
    fn test_initialize_randomly() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut p = particle(3);
        p.initialize_randomly(2.0, &mut rng);

        assert!(p.get_position().get_coordinates().iter().all(|x| x.abs() <= 2.0));
        assert!(p.get_velocity().get_coordinates().iter().all(|v| v.abs() <= 2.0));
        assert_eq!(p.get_pbest(), p.get_position());
        assert_eq!(
            p.heuristic_value(),
            Objective::SumOfSquares.evaluate(p.get_position().get_coordinates())
        );
    }

    #[test]
    fn test_update_velocity_without_attraction() {
        // x == pbest == gbest leaves only the inertia term
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = particle(2);
        p.move_to(&[1.0, 1.0]).unwrap();
        p.pbest.set_coordinates(&[1.0, 1.0]).unwrap();
        p.velocity.set_coordinates(&[1.0, -2.0]).unwrap();

        let gbest = p.get_position().clone();
        let coefficients = Coefficients {
            inertia: 0.5,
            ..Coefficients::default()
        };
        p.update_velocity(&gbest, &coefficients, &mut rng).unwrap();

        assert_eq!(p.get_velocity().get_coordinates(), &[0.5, -1.0]);
    }

    #[test]
    fn test_update_velocity_draws_per_dimension() {
        // only the cognitive term is left, so v_i == r1 for every dimension
        let mut rng = StdRng::seed_from_u64(17);
        let mut p = particle(4);
        p.pbest.set_coordinates(&[1.0; 4]).unwrap();
        let coefficients = Coefficients {
            inertia: 0.0,
            cognitive: 1.0,
            social: 0.0,
        };

        p.update_velocity(&Position::new(4), &coefficients, &mut rng)
            .unwrap();
        let first = p.get_velocity().get_coordinates().to_vec();
        assert!(first.iter().all(|v| (0.0..1.0).contains(v)));
        assert!(first.iter().any(|v| *v != first[0]));

        p.update_velocity(&Position::new(4), &coefficients, &mut rng)
            .unwrap();
        let second = p.get_velocity().get_coordinates().to_vec();
        assert!(second.iter().all(|v| (0.0..1.0).contains(v)));
        assert_ne!(first, second);
    }

    #[test]
    fn test_update_velocity_clamped() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = particle(2);
        p.velocity.set_coordinates(&[4.0, -4.0]).unwrap();

        let coefficients = Coefficients {
            inertia: 100.0,
            cognitive: 0.0,
            social: 0.0,
        };
        p.update_velocity(&Position::new(2), &coefficients, &mut rng)
            .unwrap();

        assert_eq!(p.get_velocity().get_coordinates(), &[5.0, -5.0]);
    }

    #[test]
    fn test_update_velocity_mismatch() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = particle(2);
        let result = p.update_velocity(&Position::new(3), &Coefficients::default(), &mut rng);
        assert_eq!(
            result,
            Err(SwarmError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_update_position() {
        let mut p = particle(2);
        p.move_to(&[1.0, 1.0]).unwrap();
        p.velocity.set_coordinates(&[0.5, 0.5]).unwrap();

        p.update_position().unwrap();
        assert_eq!(p.get_position().get_coordinates(), &[1.5, 1.5]);
        assert!(approx_eq!(f64, p.heuristic_value(), 4.5, ulps = 2));
    }

    #[test]
    fn test_update_pbest_strict() {
        let mut p = particle(2);
        p.move_to(&[2.0, 0.0]).unwrap();
        p.update_pbest();
        // pbest starts at the origin, 4 is worse than 0
        assert_eq!(p.get_pbest().get_coordinates(), &[0.0, 0.0]);

        p.pbest.set_coordinates(&[3.0, 0.0]).unwrap();
        p.update_pbest();
        assert_eq!(p.get_pbest().get_coordinates(), &[2.0, 0.0]);

        // tie keeps the old pbest
        p.move_to(&[0.0, 2.0]).unwrap();
        p.update_pbest();
        assert_eq!(p.get_pbest().get_coordinates(), &[2.0, 0.0]);
    }

    #[test]
    fn test_pbest_monotone() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut p = Particle::new(3, Objective::Rastrigin2D, Bounds::default());
        p.initialize_randomly(10.0, &mut rng);
        let gbest = Position::new(3);

        let mut last = p.pbest_value();
        for _ in 0..200 {
            p.update(&gbest, &Coefficients::default(), &mut rng).unwrap();
            assert!(p.pbest_value() <= last);
            last = p.pbest_value();

            assert!(p.get_position().get_coordinates().iter().all(|x| x.abs() <= 10.0));
            assert!(p.get_velocity().get_coordinates().iter().all(|v| v.abs() <= 5.0));
        }
    }
}
