use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Position;

/// A participant's timestamped stance on a prediction.
///
/// Votes are append-only: changing sides is a new vote, the old one stays
/// in the stream and keeps its weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub prediction_id: String,
    pub participant_id: String,
    pub position: Position,
    pub cast_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(
        prediction_id: impl Into<String>,
        participant_id: impl Into<String>,
        position: Position,
        cast_at: DateTime<Utc>,
    ) -> Self {
        Self {
            prediction_id: prediction_id.into(),
            participant_id: participant_id.into(),
            position,
            cast_at,
        }
    }
}
