pub mod data;
pub mod error;
pub mod optimization;
pub mod plot;
pub mod settings;

pub use data::Data;
pub use error::CustomError;
pub use optimization::{Optimization, OptimizationResult};
pub use settings::Settings;
