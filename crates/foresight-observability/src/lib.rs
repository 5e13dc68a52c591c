//! # foresight-observability
//!
//! Structured logging setup and span macros shared by the engine crates.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_json, init_tracing_with_filter};
