#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SwarmError {
    #[error("Expected {expected} coordinates, got {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, SwarmError>;
