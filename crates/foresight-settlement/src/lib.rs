//! # foresight-settlement
//!
//! Freezes a prediction's final probability once its end date plus the grace
//! period has passed. Settlement is idempotent and never touches storage.

pub mod resolver;
pub mod selection;

pub use resolver::OutcomeResolver;
pub use selection::settleable;
