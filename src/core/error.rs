use swarm::SwarmError;

#[derive(thiserror::Error, Debug)]
pub enum CustomError {
    #[error(transparent)]
    Swarm(#[from] SwarmError),

    #[error("Optimization {0} has already been run")]
    AlreadyOptimized(usize),

    #[error("Invalid value \"{value}\" for setting {key}")]
    InvalidSetting { key: String, value: String },

    #[error("The amount of dimensions must be greater than zero")]
    InvalidDimensions,

    #[error("{0}")]
    InternalError(String),
}

pub fn map_internal_err<T: std::fmt::Display>(e: T) -> CustomError {
    use CustomError::*;
    InternalError(e.to_string())
}
