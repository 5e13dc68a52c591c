use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cumulative vote counts at the end of one activity period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySnapshot {
    pub taken_at: DateTime<Utc>,
    pub agree: u64,
    pub disagree: u64,
    pub agree_ratio: f64,
}
