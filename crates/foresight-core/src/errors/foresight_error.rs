use super::error_code::{self, ForesightErrorCode};
use super::{ConfigError, ScoringError, StorageError};

/// Top-level error. Subsystem errors convert via `From`.
#[derive(Debug, thiserror::Error)]
pub enum ForesightError {
    #[error("scoring error: {0}")]
    ScoringError(#[from] ScoringError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("invalid prediction {id}: {reason}")]
    InvalidPrediction { id: String, reason: String },

    #[error("prediction not found: {id}")]
    PredictionNotFound { id: String },
}

pub type ForesightResult<T> = Result<T, ForesightError>;

impl ForesightErrorCode for ForesightError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ScoringError(e) => e.error_code(),
            Self::StorageError(e) => e.error_code(),
            Self::ConfigError(e) => e.error_code(),
            Self::InvalidPrediction { .. } => error_code::INVALID_PREDICTION,
            Self::PredictionNotFound { .. } => error_code::PREDICTION_NOT_FOUND,
        }
    }
}
