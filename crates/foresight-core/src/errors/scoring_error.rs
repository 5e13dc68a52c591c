use super::error_code::{self, ForesightErrorCode};

/// Misuse of the scoring algorithms by a caller.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("prediction {prediction_id} is not settled")]
    NotSettled { prediction_id: String },

    #[error("prediction {prediction_id} has no trend history")]
    EmptyTrend { prediction_id: String },
}

impl ForesightErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        error_code::SCORING_ERROR
    }
}
