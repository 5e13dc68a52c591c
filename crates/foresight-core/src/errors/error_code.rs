//! Stable error codes for callers that cross a process boundary.

/// Every error enum implements this to expose a machine-readable code.
pub trait ForesightErrorCode {
    /// The error code string (e.g. "STORAGE_ERROR").
    fn error_code(&self) -> &'static str;

    /// `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCORING_ERROR: &str = "SCORING_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_PREDICTION: &str = "INVALID_PREDICTION";
pub const PREDICTION_NOT_FOUND: &str = "PREDICTION_NOT_FOUND";
