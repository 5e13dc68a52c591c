use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;

/// Trend history configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// A vote opens a new snapshot only if strictly more than this many
    /// minutes passed since the previous snapshot.
    pub min_spacing_minutes: u64,
    /// Bucket width of the vote-activity series.
    pub activity_period_hours: u64,
}

impl TrendConfig {
    pub fn min_spacing(&self) -> Duration {
        Duration::minutes(self.min_spacing_minutes as i64)
    }

    pub fn activity_period(&self) -> Duration {
        Duration::hours(self.activity_period_hours as i64)
    }
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            min_spacing_minutes: defaults::DEFAULT_MIN_SPACING_MINUTES,
            activity_period_hours: defaults::DEFAULT_ACTIVITY_PERIOD_HOURS,
        }
    }
}
