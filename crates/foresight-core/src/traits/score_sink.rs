use crate::errors::ForesightResult;
use crate::models::{CalibrationScore, TrendSnapshot, WriteSet};

/// Write side of the collaborator store, plus reads of what it persisted.
pub trait IScoreSink: Send + Sync {
    /// Apply one prediction's write-set atomically.
    fn commit(&self, write_set: &WriteSet) -> ForesightResult<()>;

    /// Stored trend, ascending by `taken_at`.
    fn get_trend(&self, prediction_id: &str) -> ForesightResult<Vec<TrendSnapshot>>;

    /// Stored scores, ordered by participant id.
    fn get_scores(&self, prediction_id: &str) -> ForesightResult<Vec<CalibrationScore>>;
}
