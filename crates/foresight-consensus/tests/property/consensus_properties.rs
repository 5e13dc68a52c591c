use chrono::{Duration, TimeZone, Utc};
use foresight_consensus::ConsensusEstimator;
use foresight_core::models::{Position, Prediction, Vote};
use proptest::prelude::*;

fn arb_position() -> impl Strategy<Value = Position> {
    prop_oneof![Just(Position::Agree), Just(Position::Disagree)]
}

fn arb_votes() -> impl Strategy<Value = Vec<(i64, Position)>> {
    prop::collection::vec((0i64..240, arb_position()), 0..40)
}

fn build(offsets: &[(i64, Position)]) -> (Prediction, Vec<Vote>) {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let prediction = Prediction::new("p", t0, t0 + Duration::hours(240));
    let mut votes: Vec<Vote> = offsets
        .iter()
        .enumerate()
        .map(|(i, (h, pos))| Vote::new("p", format!("u{i}"), *pos, t0 + Duration::hours(*h)))
        .collect();
    votes.sort_by_key(|v| v.cast_at);
    (prediction, votes)
}

proptest! {
    #[test]
    fn probability_is_bounded(offsets in arb_votes(), as_of in 0i64..300) {
        let (prediction, votes) = build(&offsets);
        let p = ConsensusEstimator::new().compute(
            &prediction,
            &votes,
            prediction.created_at + Duration::hours(as_of),
        );
        prop_assert!((0.0..=1.0).contains(&p), "out of bounds: {}", p);
    }

    #[test]
    fn nothing_qualifies_before_first_vote(offsets in arb_votes()) {
        let (prediction, votes) = build(&offsets);
        let before = prediction.created_at - Duration::seconds(1);
        let p = ConsensusEstimator::new().compute(&prediction, &votes, before);
        prop_assert_eq!(p, 0.5);
    }

    #[test]
    fn unanimous_agree_is_one(hours in prop::collection::vec(1i64..240, 1..20)) {
        let offsets: Vec<(i64, Position)> =
            hours.into_iter().map(|h| (h, Position::Agree)).collect();
        let (prediction, votes) = build(&offsets);
        let p = ConsensusEstimator::new().compute(&prediction, &votes, prediction.end_date);
        prop_assert_eq!(p, 1.0);
    }
}
