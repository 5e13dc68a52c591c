use crate::errors::ForesightResult;
use crate::models::{Prediction, Vote};

/// Read side of the collaborator store.
///
/// Implementations must hand out a consistent snapshot per call; the engine
/// never re-reads votes in the middle of one computation.
pub trait IVoteSource: Send + Sync {
    fn get_prediction(&self, prediction_id: &str) -> ForesightResult<Option<Prediction>>;

    /// All votes for the prediction, ascending by `cast_at`.
    fn get_votes(&self, prediction_id: &str) -> ForesightResult<Vec<Vote>>;

    /// Every known prediction, for batch selection.
    fn list_predictions(&self) -> ForesightResult<Vec<Prediction>>;
}
