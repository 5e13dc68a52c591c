use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One participant's score on one settled prediction.
///
/// Rows are replaced wholesale on every scoring run, never accumulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationScore {
    pub prediction_id: String,
    pub participant_id: String,
    pub score: f64,
    pub computed_at: DateTime<Utc>,
}
