use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;

/// Settlement subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementConfig {
    /// Hours after the end date before a prediction may be settled.
    pub grace_hours: u64,
}

impl SettlementConfig {
    pub fn grace(&self) -> Duration {
        Duration::hours(self.grace_hours as i64)
    }
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            grace_hours: defaults::DEFAULT_GRACE_HOURS,
        }
    }
}
