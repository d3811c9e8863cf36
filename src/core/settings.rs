use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use swarm::{Bounds, Coefficients, Objective};

use super::error::{map_internal_err, CustomError};

/// Everything the shell can configure for a run. Missing fields take the defaults.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub cognitive_coefficient: f64,
    pub inertia_coefficient: f64,
    pub social_coefficient: f64,
    pub particle_amount: i64,
    pub dimensions: usize,
    pub iterations: usize,
    pub heuristic: Objective,
    pub position_bound: f64,
    pub velocity_bound: f64,
    pub seed: Option<u64>,
    pub runs: usize,
    pub session: String,
    pub output_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        let coefficients = Coefficients::default();
        let bounds = Bounds::default();
        Settings {
            cognitive_coefficient: coefficients.cognitive,
            inertia_coefficient: coefficients.inertia,
            social_coefficient: coefficients.social,
            particle_amount: 10,
            dimensions: 3,
            iterations: 20,
            heuristic: Objective::SumOfSquares,
            position_bound: bounds.position,
            velocity_bound: bounds.velocity,
            seed: None,
            runs: 1,
            session: "session1_results".to_string(),
            output_dir: ".".to_string(),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T, CustomError> {
    match dotenvy::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| CustomError::InvalidSetting {
            key: key.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

impl Settings {
    /// Read `PSO_*` variables, a `.env` file is honoured.
    pub fn from_env() -> Result<Settings, CustomError> {
        let d = Settings::default();
        let seed = match dotenvy::var("PSO_SEED") {
            Ok(value) => Some(value.trim().parse().map_err(|_| CustomError::InvalidSetting {
                key: "PSO_SEED".to_string(),
                value,
            })?),
            Err(_) => None,
        };

        Settings {
            cognitive_coefficient: env_or("PSO_COGNITIVE", d.cognitive_coefficient)?,
            inertia_coefficient: env_or("PSO_INERTIA", d.inertia_coefficient)?,
            social_coefficient: env_or("PSO_SOCIAL", d.social_coefficient)?,
            particle_amount: env_or("PSO_PARTICLES", d.particle_amount)?,
            dimensions: env_or("PSO_DIMENSIONS", d.dimensions)?,
            iterations: env_or("PSO_ITERATIONS", d.iterations)?,
            heuristic: Objective::from_selector(&env_or("PSO_HEURISTIC", String::new())?),
            position_bound: env_or("PSO_POSITION_BOUND", d.position_bound)?,
            velocity_bound: env_or("PSO_VELOCITY_BOUND", d.velocity_bound)?,
            seed,
            runs: env_or("PSO_RUNS", d.runs)?,
            session: env_or("PSO_SESSION", d.session)?,
            output_dir: env_or("PSO_OUTPUT_DIR", d.output_dir)?,
        }
        .validated()
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Settings, CustomError> {
        let content = fs::read_to_string(path).map_err(map_internal_err)?;
        Settings::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Settings, CustomError> {
        let settings: Settings = serde_json::from_str(content).map_err(map_internal_err)?;
        settings.validated()
    }

    fn validated(self) -> Result<Settings, CustomError> {
        if self.dimensions == 0 {
            return Err(CustomError::InvalidDimensions);
        }
        Ok(self)
    }

    pub fn coefficients(&self) -> Coefficients {
        Coefficients {
            inertia: self.inertia_coefficient,
            cognitive: self.cognitive_coefficient,
            social: self.social_coefficient,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            position: self.position_bound,
            velocity: self.velocity_bound,
        }
    }
}
