use chrono::{Duration, TimeZone, Utc};
use foresight_core::models::{Position, Prediction, Vote};
use foresight_trend::{downsample, TrendBuilder};
use proptest::prelude::*;

fn arb_votes() -> impl Strategy<Value = Vec<(i64, bool)>> {
    // Offsets in minutes across a 10-day window, some outside it.
    prop::collection::vec((-120i64..15_000, any::<bool>()), 0..80)
}

fn build(offsets: &[(i64, bool)]) -> (Prediction, Vec<Vote>) {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let prediction = Prediction::new("p", t0, t0 + Duration::days(10));
    let mut votes: Vec<Vote> = offsets
        .iter()
        .enumerate()
        .map(|(i, (m, agree))| {
            let pos = if *agree { Position::Agree } else { Position::Disagree };
            Vote::new("p", format!("u{}", i % 7), pos, t0 + Duration::minutes(*m))
        })
        .collect();
    votes.sort_by_key(|v| v.cast_at);
    (prediction, votes)
}

proptest! {
    #[test]
    fn first_is_creation_last_is_end(offsets in arb_votes()) {
        let (prediction, votes) = build(&offsets);
        let trend = TrendBuilder::default().build(&prediction, &votes, prediction.end_date + Duration::days(3));
        prop_assert_eq!(trend.first().unwrap().taken_at, prediction.created_at);
        prop_assert_eq!(trend.last().unwrap().taken_at, prediction.end_date);
    }

    #[test]
    fn strictly_increasing_and_spaced(offsets in arb_votes()) {
        let (prediction, votes) = build(&offsets);
        let trend = TrendBuilder::default().build(&prediction, &votes, prediction.end_date);
        for pair in trend.windows(2) {
            prop_assert!(pair[0].taken_at < pair[1].taken_at);
        }
        // Every gap except the one into the closing boundary is at least an hour.
        let n = trend.len();
        for pair in trend[..n.saturating_sub(1)].windows(2) {
            prop_assert!(pair[1].taken_at - pair[0].taken_at >= Duration::hours(1));
        }
        for (i, s) in trend.iter().enumerate() {
            prop_assert_eq!(s.sequence as usize, i);
            prop_assert!((0.0..=1.0).contains(&s.consensus_probability));
        }
    }

    #[test]
    fn downsample_identity_case(values in prop::collection::vec(0.0f64..=1.0, 0..60), extra in 0usize..10) {
        let point_count = values.len() + extra;
        prop_assert_eq!(downsample(&values, point_count), values);
    }

    #[test]
    fn downsample_reads_in_bounds(len in 3usize..500, point_count in 1usize..100) {
        let values: Vec<f64> = (0..len).map(|i| i as f64).collect();
        let out = downsample(&values, point_count);
        if len > point_count {
            prop_assert_eq!(out.len(), point_count - 1);
        }
    }
}
