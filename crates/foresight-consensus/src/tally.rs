//! Active-vote tally: each participant counts once, on their latest side.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use foresight_core::models::{Position, Vote, VoteTally};

/// Tally the latest vote per participant among votes cast at or before `as_of`.
///
/// Votes are not assumed sorted; ties on `cast_at` go to the later entry.
pub fn tally(votes: &[Vote], as_of: DateTime<Utc>) -> VoteTally {
    let mut latest: HashMap<&str, &Vote> = HashMap::new();
    let mut last_vote_at = None;

    for vote in votes.iter().filter(|v| v.cast_at <= as_of) {
        latest
            .entry(vote.participant_id.as_str())
            .and_modify(|current| {
                if vote.cast_at >= current.cast_at {
                    *current = vote;
                }
            })
            .or_insert(vote);
        if last_vote_at.map_or(true, |at| vote.cast_at > at) {
            last_vote_at = Some(vote.cast_at);
        }
    }

    let agree_count = latest
        .values()
        .filter(|v| v.position == Position::Agree)
        .count() as u64;

    VoteTally {
        agree_count,
        disagree_count: latest.len() as u64 - agree_count,
        last_vote_at,
    }
}
