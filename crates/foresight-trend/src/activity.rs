//! Cumulative vote activity per fixed period.

use chrono::{DateTime, Duration, Utc};
use foresight_core::constants::NEUTRAL_PROBABILITY;
use foresight_core::models::{ActivitySnapshot, Position, Prediction, Vote};

/// Walk `[from, to)` in `period` buckets and emit the running agree/disagree
/// counts at the end of every bucket that closes before `to`.
///
/// Every in-window vote counts, including superseded ones. Buckets are
/// half-open so a vote on a bucket edge is counted once.
pub fn build_activity(
    prediction: &Prediction,
    votes: &[Vote],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    period: Duration,
) -> Vec<ActivitySnapshot> {
    if period <= Duration::zero() {
        return Vec::new();
    }

    let mut ordered: Vec<&Vote> = votes
        .iter()
        .filter(|v| prediction.contains(v.cast_at) && v.cast_at >= from)
        .collect();
    ordered.sort_by_key(|v| v.cast_at);

    let mut snapshots = Vec::new();
    let (mut agree, mut disagree) = (0u64, 0u64);
    let mut cursor = 0;
    let mut end = from + period;

    while end < to {
        while cursor < ordered.len() && ordered[cursor].cast_at < end {
            match ordered[cursor].position {
                Position::Agree => agree += 1,
                Position::Disagree => disagree += 1,
            }
            cursor += 1;
        }
        let total = agree + disagree;
        snapshots.push(ActivitySnapshot {
            taken_at: end,
            agree,
            disagree,
            agree_ratio: if total > 0 {
                agree as f64 / total as f64
            } else {
                NEUTRAL_PROBABILITY
            },
        });
        end += period;
    }
    snapshots
}
