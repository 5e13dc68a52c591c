//! Time arithmetic shared by the estimator, trend builder, and scorer.

use chrono::{DateTime, Utc};

use crate::constants::MILLIS_PER_HOUR;

/// Milliseconds from `from` to `to` as `f64`. Negative when `to < from`.
pub fn millis_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64
}

/// Fractional hours from `from` to `to`, clamped at zero.
pub fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (millis_between(from, to) / MILLIS_PER_HOUR).max(0.0)
}
