pub mod error;
pub mod heuristic;
pub mod particle;
pub mod particle_swarm;
pub mod position;
pub mod vector;
pub mod velocity;

pub use error::SwarmError;
pub use heuristic::{Heuristic, Objective};
pub use particle::{Bounds, Coefficients, Particle};
pub use particle_swarm::ParticleSwarm;
pub use position::Position;
pub use vector::{Vector, VectorLike};
pub use velocity::Velocity;
