use std::fmt;

use rand::Rng;

use crate::{
    error::Result,
    heuristic::Objective,
    particle::{Bounds, Coefficients, Particle},
    position::Position,
    vector::VectorLike,
};

pub const DEFAULT_PARTICLE_AMOUNT: usize = 10;

pub struct ParticleSwarm {
    coefficients: Coefficients,
    bounds: Bounds,
    objective: Objective,
    particles: Vec<Particle>,
    gbest: Position,
}

impl ParticleSwarm {
    /// A `particle_amount` below 1 is replaced by [`DEFAULT_PARTICLE_AMOUNT`].
    pub fn new(
        coefficients: Coefficients,
        bounds: Bounds,
        dimensions: usize,
        particle_amount: i64,
        objective: Objective,
    ) -> ParticleSwarm {
        let particle_amount = if particle_amount < 1 {
            log::warn!(
                "The amount of particles must be greater than zero, got {}. Amount defaulted to {}.",
                particle_amount,
                DEFAULT_PARTICLE_AMOUNT
            );
            DEFAULT_PARTICLE_AMOUNT
        } else {
            particle_amount as usize
        };

        ParticleSwarm {
            coefficients,
            bounds,
            objective,
            particles: (0..particle_amount)
                .map(|_| Particle::new(dimensions, objective, bounds))
                .collect(),
            gbest: Position::with_bound(dimensions, bounds.position),
        }
    }

    /// Randomize every particle, seed gbest from the first one and refresh it.
    pub fn initialize_particles_randomly<R: Rng + ?Sized>(
        &mut self,
        bound: f64,
        rng: &mut R,
    ) -> Result<()> {
        for particle in self.particles.iter_mut() {
            particle.initialize_randomly(bound, rng);
        }
        if let Some(first) = self.particles.first() {
            self.gbest
                .set_coordinates(first.get_position().get_coordinates())?;
        }
        self.update_gbest();
        Ok(())
    }

    /// Move every particle against the gbest fixed at the start of the sweep.
    ///
    /// gbest itself is not touched here, call [`ParticleSwarm::update_gbest`]
    /// once the whole sweep is done.
    pub fn update_particles<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let gbest = &self.gbest;
        for particle in self.particles.iter_mut() {
            particle.update(gbest, &self.coefficients, rng)?;
        }
        Ok(())
    }

    /// Scan the particles in order, each one compared against the best found
    /// so far in this scan (not the best at the start of it).
    ///
    /// Returns the index of the last particle that replaced gbest, if any.
    pub fn update_gbest(&mut self) -> Option<usize> {
        let (gbest, winner) = self.particles.iter().enumerate().fold(
            (self.gbest.clone(), None),
            |(best, winner), (i, particle)| {
                let f = particle.get_heuristic().get_heuristic_f();
                if particle.heuristic_value() < f.evaluate(best.get_coordinates()) {
                    (particle.get_position().clone(), Some(i))
                } else {
                    (best, winner)
                }
            },
        );
        self.gbest = gbest;

        if let Some(i) = winner {
            log::debug!("gbest taken from particle {}: {}", i, self.gbest);
        }
        winner
    }

    pub fn gbest_value(&self) -> f64 {
        self.objective.evaluate(self.gbest.get_coordinates())
    }

    pub fn get_coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub fn get_cognitive_coefficient(&self) -> f64 {
        self.coefficients.cognitive
    }

    pub fn get_inertia_coefficient(&self) -> f64 {
        self.coefficients.inertia
    }

    pub fn get_social_coefficient(&self) -> f64 {
        self.coefficients.social
    }

    pub fn get_bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn get_heuristic(&self) -> Objective {
        self.objective
    }

    pub fn get_particle_amount(&self) -> usize {
        self.particles.len()
    }

    pub fn get_particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn get_particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn get_gbest(&self) -> &Position {
        &self.gbest
    }
}

impl fmt::Display for ParticleSwarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Particle swarm with {} particles, cognitive coefficient {}, inertia coefficient {}, social coefficient {} and global best position {}.",
            self.get_particle_amount(),
            self.coefficients.cognitive,
            self.coefficients.inertia,
            self.coefficients.social,
            self.gbest
        )
    }
}
