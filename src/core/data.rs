use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;

use super::{
    error::{map_internal_err, CustomError},
    optimization::{OptimizationResult, Row},
};

/// One spreadsheet row. Gap rows leave every field empty.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct CsvRow {
    run: Option<usize>,
    iteration: Option<usize>,
    particle: Option<usize>,
    #[serde(rename = "Heuristic")]
    heuristic: Option<String>,
    #[serde(rename = "Position")]
    position: Option<String>,
    #[serde(rename = "Velocity")]
    velocity: Option<String>,
    #[serde(rename = "Pbest")]
    pbest: Option<String>,
}

impl CsvRow {
    fn gap() -> CsvRow {
        CsvRow::default()
    }

    fn from_row(run: usize, row: &Row) -> CsvRow {
        match row {
            Row::Gap => CsvRow::gap(),
            Row::Particle {
                iteration,
                particle,
                record,
            } => CsvRow {
                run: Some(run),
                iteration: Some(*iteration),
                particle: Some(*particle),
                heuristic: Some(format!("{:?}", record.heuristic)),
                position: Some(format!("{:?}", record.position)),
                velocity: Some(format!("{:?}", record.velocity)),
                pbest: Some(format!("{:?}", record.pbest)),
            },
        }
    }

}

#[cfg(test)]
impl CsvRow {
    fn is_gap(&self) -> bool {
        self == &CsvRow::gap()
    }
}

/// Session level store of finished optimizations.
#[derive(Serialize, Debug, Clone)]
pub struct Data {
    name: String,
    optimizations: Vec<OptimizationResult>,
    gbest_indexes: Vec<Vec<usize>>,
}

impl Data {
    pub fn new(name: &str) -> Data {
        Data {
            name: name.to_string(),
            optimizations: vec![],
            gbest_indexes: vec![],
        }
    }

    pub fn append_optimization(&mut self, optimization: OptimizationResult) {
        log::debug!(
            "Recording optimization {} into {}",
            optimization.index,
            self.name
        );
        self.optimizations.push(optimization);
    }

    pub fn append_gbest_indexes(&mut self, indexes: Vec<usize>) {
        self.gbest_indexes.push(indexes);
    }

    pub fn optimizations(&self) -> &[OptimizationResult] {
        &self.optimizations
    }

    pub fn gbest_indexes(&self) -> &[Vec<usize>] {
        &self.gbest_indexes
    }

    /// Every stored run flattened, consecutive runs separated by a gap row.
    pub fn rows(&self) -> Vec<CsvRow> {
        let mut rows = vec![];
        for (k, optimization) in self.optimizations.iter().enumerate() {
            if k > 0 {
                rows.push(CsvRow::gap());
            }
            rows.extend(
                optimization
                    .trajectory
                    .rows()
                    .iter()
                    .map(|row| CsvRow::from_row(optimization.index, row)),
            );
        }
        rows
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), CustomError> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in self.rows() {
            writer.serialize(row).map_err(map_internal_err)?;
        }
        writer.flush().map_err(map_internal_err)?;
        Ok(())
    }

    pub fn save_csv<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, CustomError> {
        let path = dir.as_ref().join(format!("{}.csv", self.name));
        let file = File::create(&path).map_err(map_internal_err)?;
        self.write_csv(file)?;
        Ok(path)
    }

    pub fn save_json<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, CustomError> {
        let path = dir.as_ref().join(format!("{}.json", self.name));
        let file = File::create(&path).map_err(map_internal_err)?;
        serde_json::to_writer_pretty(file, self).map_err(map_internal_err)?;
        Ok(path)
    }
}
