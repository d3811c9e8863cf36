use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use swarm::{ParticleSwarm, VectorLike};

use super::{data::Data, error::CustomError, settings::Settings};

pub mod trajectory;

pub use trajectory::{ParticleRecord, Row, Trajectory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Uninitialized,
    Running,
}

/// Everything a finished run hands to persistence and display.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    pub index: usize,
    pub trajectory: Trajectory,
    /// never populated, kept as an explicit empty list
    pub gbest_indexes: Vec<usize>,
    pub gbest: Vec<f64>,
    pub gbest_value: f64,
    /// gbest objective value after each iteration, iteration 0 included
    pub convergence: Vec<f64>,
}

pub struct Optimization {
    index: usize,
    iterations: usize,
    dimensions: usize,
    position_bound: f64,
    swarm: ParticleSwarm,
    rng: StdRng,
    state: State,
}

impl Optimization {
    pub fn new(index: usize, settings: &Settings) -> Optimization {
        let swarm = ParticleSwarm::new(
            settings.coefficients(),
            settings.bounds(),
            settings.dimensions,
            settings.particle_amount,
            settings.heuristic,
        );
        let rng = match settings.seed {
            // consecutive runs of one session must not replay each other
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
            None => StdRng::from_entropy(),
        };

        Optimization {
            index,
            iterations: settings.iterations,
            dimensions: settings.dimensions,
            position_bound: settings.position_bound,
            swarm,
            rng,
            state: State::Uninitialized,
        }
    }

    /// Run the whole optimization once and return its trajectory.
    pub fn run(&mut self) -> Result<OptimizationResult, CustomError> {
        if self.state == State::Running {
            return Err(CustomError::AlreadyOptimized(self.index));
        }
        self.state = State::Running;

        log::info!(
            "Optimization {} started: {} on {} dimensions, {} iterations",
            self.index,
            self.swarm.get_heuristic().name(),
            self.dimensions,
            self.iterations
        );
        self.swarm
            .initialize_particles_randomly(self.position_bound, &mut self.rng)?;

        let mut trajectory = Trajectory::new();
        let mut convergence = Vec::with_capacity(self.iterations + 1);
        let swarm_gbest_index: Vec<usize> = vec![];

        for iteration in 0..=self.iterations {
            // iteration 0 is the state before any update
            if iteration > 0 {
                self.swarm.update_particles(&mut self.rng)?;
                self.swarm.update_gbest();
            }

            trajectory.record_iteration(iteration, self.swarm.get_particles());
            if iteration != self.iterations {
                trajectory.push_gap();
            }
            convergence.push(self.swarm.gbest_value());

            log::info!(
                "Global best: {}, Heuristic value: {}",
                self.swarm.get_gbest(),
                self.swarm.gbest_value()
            );
        }

        Ok(OptimizationResult {
            index: self.index,
            trajectory,
            gbest_indexes: swarm_gbest_index,
            gbest: self.swarm.get_gbest().get_coordinates().to_vec(),
            gbest_value: self.swarm.gbest_value(),
            convergence,
        })
    }

    /// Run and record the result into `data`.
    pub fn optimize(&mut self, data: &mut Data) -> Result<(), CustomError> {
        let result = self.run()?;
        data.append_gbest_indexes(result.gbest_indexes.clone());
        data.append_optimization(result);
        Ok(())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn swarm(&self) -> &ParticleSwarm {
        &self.swarm
    }
}
