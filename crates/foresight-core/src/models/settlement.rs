use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Position;

/// Result of a settlement attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Settlement {
    /// The prediction was settled by an earlier run. Nothing changes.
    AlreadySettled,
    /// The grace period has not elapsed yet. Nothing changes.
    NotYetSettleable { eligible_at: DateTime<Utc> },
    /// The final probability was frozen by this attempt.
    Settled {
        final_probability: f64,
        outcome: Position,
    },
}

impl Settlement {
    pub fn is_settled_now(&self) -> bool {
        matches!(self, Settlement::Settled { .. })
    }
}
