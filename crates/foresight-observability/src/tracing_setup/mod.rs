//! Tracing initialization.
//!
//! Every initializer is guarded by one `Once`: the first call installs the
//! global subscriber and later calls are no-ops.

pub mod spans;

use std::sync::Once;

use foresight_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "FORESIGHT_LOG";

static INIT: Once = Once::new();

/// Initialize human-readable logging.
///
/// Reads `FORESIGHT_LOG` (e.g. `foresight_engine=debug,info`), falling back
/// to `info` when unset or invalid.
pub fn init_tracing() {
    install(env_filter("info"), false);
}

/// Initialize with a fixed filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

/// Initialize JSON-line logging, filtered like [`init_tracing`].
pub fn init_tracing_json() {
    install(env_filter("info"), true);
}

/// Initialize from configuration. `FORESIGHT_LOG` still wins over
/// `log_level` when set.
pub fn init_from_config(config: &ObservabilityConfig) {
    install(env_filter(&config.log_level), config.json);
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // A subscriber installed by the host process takes precedence.
        let _ = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
    });
}
