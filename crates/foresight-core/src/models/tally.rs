use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Counts of active votes: each participant counted once, on their latest side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub agree_count: u64,
    pub disagree_count: u64,
    /// Most recent vote considered, if any.
    pub last_vote_at: Option<DateTime<Utc>>,
}

impl VoteTally {
    pub fn total(&self) -> u64 {
        self.agree_count + self.disagree_count
    }
}
