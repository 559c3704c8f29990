//! Error types for drawing readings.

use arcana_core::CoreError;
use thiserror::Error;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that can abort a draw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadingError {
    /// The requested spread is not one of the known topologies.
    #[error("invalid spread: \"{0}\"")]
    InvalidSpread(String),

    /// Static data was inconsistent.
    #[error("{0}")]
    Core(CoreError),
}

impl From<CoreError> for ReadingError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidSpread(id) => Self::InvalidSpread(id),
            other => Self::Core(other),
        }
    }
}
