use thiserror::Error;

/// Precondition violations raised by the chart and the coverage engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoverageError {
    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("Invalid creature: {0}")]
    InvalidCreature(String),
}

pub type Result<T> = std::result::Result<T, CoverageError>;
