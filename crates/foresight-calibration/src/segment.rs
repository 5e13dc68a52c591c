//! Reward for one constant-state segment of a participant's history.

use chrono::{DateTime, Utc};
use foresight_core::models::Position;
use foresight_core::time::hours_between;

/// `sign · |indicator(outcome) − reference| · hours(start, end)`.
///
/// `sign` is +1 when `held` matches `outcome`, −1 otherwise. A segment of
/// zero or negative length contributes nothing.
pub fn reward(
    held: Position,
    outcome: Position,
    reference: f64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> f64 {
    let sign = if held == outcome { 1.0 } else { -1.0 };
    sign * (outcome.indicator() - reference).abs() * hours_between(start, end)
}
