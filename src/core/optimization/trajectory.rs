use serde::{Deserialize, Serialize};
use swarm::{Particle, VectorLike};

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn rounded(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| round2(*v)).collect()
}

/// State of one particle at one iteration, every value rounded to 2 decimals.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ParticleRecord {
    #[serde(rename = "Heuristic")]
    pub heuristic: Vec<f64>,
    #[serde(rename = "Position")]
    pub position: Vec<f64>,
    #[serde(rename = "Velocity")]
    pub velocity: Vec<f64>,
    #[serde(rename = "Pbest")]
    pub pbest: Vec<f64>,
}

impl ParticleRecord {
    pub fn from_particle(particle: &Particle) -> ParticleRecord {
        ParticleRecord {
            heuristic: rounded(particle.get_heuristic().get_coordinates()),
            position: rounded(particle.get_position().get_coordinates()),
            velocity: rounded(particle.get_velocity().get_coordinates()),
            pbest: rounded(particle.get_pbest().get_coordinates()),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind")]
pub enum Row {
    Particle {
        iteration: usize,
        particle: usize,
        record: ParticleRecord,
    },
    /// all-missing separator
    Gap,
}

/// Append-only record of a run: one row group per iteration, gaps in between.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    rows: Vec<Row>,
}

impl Trajectory {
    pub fn new() -> Trajectory {
        Trajectory::default()
    }

    pub fn record_iteration(&mut self, iteration: usize, particles: &[Particle]) {
        self.rows
            .extend(particles.iter().enumerate().map(|(i, p)| Row::Particle {
                iteration,
                particle: i,
                record: ParticleRecord::from_particle(p),
            }));
    }

    pub fn push_gap(&mut self) {
        self.rows.push(Row::Gap);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn gap_count(&self) -> usize {
        self.rows.iter().filter(|r| matches!(r, Row::Gap)).count()
    }

    pub fn row_groups(&self) -> Vec<Vec<&ParticleRecord>> {
        self.rows
            .split(|r| matches!(r, Row::Gap))
            .filter(|group| !group.is_empty())
            .map(|group| {
                group
                    .iter()
                    .filter_map(|r| match r {
                        Row::Particle { record, .. } => Some(record),
                        Row::Gap => None,
                    })
                    .collect()
            })
            .collect()
    }

    /// Records of every particle at `iteration`, in swarm order.
    pub fn iteration(&self, iteration: usize) -> Vec<&ParticleRecord> {
        self.rows
            .iter()
            .filter_map(|r| match r {
                Row::Particle {
                    iteration: i,
                    record,
                    ..
                } if *i == iteration => Some(record),
                _ => None,
            })
            .collect()
    }
}
