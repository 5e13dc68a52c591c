use chrono::{DateTime, Utc};
use foresight_core::models::{Prediction, Vote};

use crate::accumulator::WeightAccumulator;

/// Weights and counts behind one consensus value, for observability.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsensusBreakdown {
    pub agree_weight: f64,
    pub total_weight: f64,
    /// Votes in the window and at or before `as_of`.
    pub qualifying: usize,
    /// Votes outside `[created_at, end_date]`.
    pub out_of_window: usize,
    pub probability: f64,
}

/// Time-weighted consensus:
///
/// ```text
/// p = Σ (t_i − created_at)·[agree_i] / Σ (t_i − created_at)
/// ```
///
/// over votes with `t_i ≤ as_of` inside the prediction window.
/// The probability is 0.5 when the denominator is zero.
pub fn compute_breakdown(
    prediction: &Prediction,
    votes: &[Vote],
    as_of: DateTime<Utc>,
) -> ConsensusBreakdown {
    let mut weights = WeightAccumulator::new();
    let mut qualifying = 0;
    let mut out_of_window = 0;

    for vote in votes {
        if !prediction.contains(vote.cast_at) {
            out_of_window += 1;
            continue;
        }
        if vote.cast_at > as_of {
            continue;
        }
        weights.add(prediction.created_at, vote);
        qualifying += 1;
    }

    ConsensusBreakdown {
        agree_weight: weights.agree_weight(),
        total_weight: weights.total_weight(),
        qualifying,
        out_of_window,
        probability: weights.probability(),
    }
}
