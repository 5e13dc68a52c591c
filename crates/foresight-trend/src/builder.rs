use chrono::{DateTime, Duration, Utc};
use foresight_consensus::WeightAccumulator;
use foresight_core::config::TrendConfig;
use foresight_core::models::{Prediction, TrendSnapshot, Vote};
use tracing::debug;

/// Builds the decimated consensus history of one prediction.
///
/// The output is a pure function of the prediction and its votes: there is no
/// incremental state, a rebuild replaces whatever was stored before.
#[derive(Debug, Clone)]
pub struct TrendBuilder {
    min_spacing: Duration,
}

impl TrendBuilder {
    pub fn new(min_spacing: Duration) -> Self {
        Self { min_spacing }
    }

    pub fn from_config(config: &TrendConfig) -> Self {
        Self::new(config.min_spacing())
    }

    pub fn min_spacing(&self) -> Duration {
        self.min_spacing
    }

    /// Where the trend ends: the end date once it has passed (or the
    /// prediction is settled), otherwise `as_of`, never before creation.
    pub fn closing_boundary(prediction: &Prediction, as_of: DateTime<Utc>) -> DateTime<Utc> {
        if prediction.settled || as_of >= prediction.end_date {
            prediction.end_date
        } else {
            as_of.max(prediction.created_at)
        }
    }

    /// Snapshot instants: creation, then each vote more than `min_spacing`
    /// after the previous instant, then the closing boundary.
    pub fn sample_times(
        &self,
        prediction: &Prediction,
        votes: &[Vote],
        until: DateTime<Utc>,
    ) -> Vec<DateTime<Utc>> {
        let mut times = vec![prediction.created_at];
        let mut last = prediction.created_at;

        for cast_at in sorted_cast_times(votes) {
            if !prediction.contains(cast_at) {
                debug!(prediction_id = %prediction.id, %cast_at, "vote outside window, not sampled");
                continue;
            }
            if cast_at >= until {
                break;
            }
            if cast_at - last > self.min_spacing {
                times.push(cast_at);
                last = cast_at;
            }
        }

        if until > last {
            times.push(until);
        }
        times
    }

    /// Rebuild the full trend as of `as_of`.
    pub fn build(
        &self,
        prediction: &Prediction,
        votes: &[Vote],
        as_of: DateTime<Utc>,
    ) -> Vec<TrendSnapshot> {
        let until = Self::closing_boundary(prediction, as_of);
        let times = self.sample_times(prediction, votes, until);

        let mut ordered: Vec<&Vote> = votes
            .iter()
            .filter(|v| prediction.contains(v.cast_at))
            .collect();
        ordered.sort_by_key(|v| v.cast_at);

        let mut weights = WeightAccumulator::new();
        let mut cursor = 0;

        times
            .into_iter()
            .enumerate()
            .map(|(sequence, taken_at)| {
                while cursor < ordered.len() && ordered[cursor].cast_at <= taken_at {
                    weights.add(prediction.created_at, ordered[cursor]);
                    cursor += 1;
                }
                TrendSnapshot {
                    prediction_id: prediction.id.clone(),
                    taken_at,
                    consensus_probability: weights.probability(),
                    sequence: sequence as u32,
                }
            })
            .collect()
    }
}

impl Default for TrendBuilder {
    fn default() -> Self {
        Self::from_config(&TrendConfig::default())
    }
}

fn sorted_cast_times(votes: &[Vote]) -> Vec<DateTime<Utc>> {
    let mut times: Vec<DateTime<Utc>> = votes.iter().map(|v| v.cast_at).collect();
    times.sort();
    times
}
