//! Error handling for Foresight.
//! One error enum per subsystem, `thiserror` only, aggregated by `ForesightError`.

pub mod config_error;
pub mod error_code;
pub mod foresight_error;
pub mod scoring_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::ForesightErrorCode;
pub use foresight_error::{ForesightError, ForesightResult};
pub use scoring_error::ScoringError;
pub use storage_error::StorageError;
