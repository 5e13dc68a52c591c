use chrono::{DateTime, Utc};
use foresight_core::models::{Prediction, Vote};
use tracing::debug;

use crate::weights::{self, ConsensusBreakdown};

/// Stateless estimator of the instantaneous consensus probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsensusEstimator;

impl ConsensusEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Probability in `[0, 1]` that the event occurs, given votes up to `as_of`.
    pub fn compute(&self, prediction: &Prediction, votes: &[Vote], as_of: DateTime<Utc>) -> f64 {
        let breakdown = self.compute_breakdown(prediction, votes, as_of);
        if breakdown.out_of_window > 0 {
            debug!(
                prediction_id = %prediction.id,
                skipped = breakdown.out_of_window,
                "ignored votes outside the prediction window"
            );
        }
        breakdown.probability
    }

    /// Same as [`compute`](Self::compute), with the weights behind it.
    pub fn compute_breakdown(
        &self,
        prediction: &Prediction,
        votes: &[Vote],
        as_of: DateTime<Utc>,
    ) -> ConsensusBreakdown {
        weights::compute_breakdown(prediction, votes, as_of)
    }
}
