use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored consensus-probability sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSnapshot {
    pub prediction_id: String,
    pub taken_at: DateTime<Utc>,
    pub consensus_probability: f64,
    /// Position in the trend, starting at 0 for the creation snapshot.
    pub sequence: u32,
}
