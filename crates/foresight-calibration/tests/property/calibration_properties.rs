use chrono::{Duration, TimeZone, Utc};
use foresight_calibration::CalibrationScorer;
use foresight_core::models::{Position, Prediction, TrendSnapshot, Vote};
use proptest::prelude::*;

fn settled_agree() -> Prediction {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut p = Prediction::new("p", t0, t0 + Duration::days(10));
    p.settled = true;
    p.final_probability = 1.0;
    p
}

fn trend_from(prediction: &Prediction, points: &[(i64, f64)]) -> Vec<TrendSnapshot> {
    let mut times: Vec<i64> = points.iter().map(|(m, _)| *m).collect();
    times.sort_unstable();
    times.dedup();
    let mut out = vec![TrendSnapshot {
        prediction_id: prediction.id.clone(),
        taken_at: prediction.created_at,
        consensus_probability: 0.5,
        sequence: 0,
    }];
    for (i, m) in times.iter().enumerate() {
        let value = points.iter().find(|(t, _)| t == m).map_or(0.5, |(_, v)| *v);
        out.push(TrendSnapshot {
            prediction_id: prediction.id.clone(),
            taken_at: prediction.created_at + Duration::minutes(*m),
            consensus_probability: value,
            sequence: i as u32 + 1,
        });
    }
    out
}

fn arb_trend() -> impl Strategy<Value = Vec<(i64, f64)>> {
    prop::collection::vec((1i64..14_400, 0.0f64..=1.0), 0..40)
}

proptest! {
    #[test]
    fn holding_outcome_side_never_loses(points in arb_trend(), start in 0i64..14_400) {
        let p = settled_agree();
        let trend = trend_from(&p, &points);
        let votes = vec![Vote::new("p", "a", Position::Agree, p.created_at + Duration::minutes(start))];
        let scores = CalibrationScorer::default().score(&p, &votes, &trend, p.end_date).unwrap();
        prop_assert_eq!(scores.len(), 1);
        prop_assert!(scores[0].score >= 0.0);
    }

    #[test]
    fn holding_wrong_side_never_gains(points in arb_trend(), start in 0i64..14_400) {
        let p = settled_agree();
        let trend = trend_from(&p, &points);
        let votes = vec![Vote::new("p", "a", Position::Disagree, p.created_at + Duration::minutes(start))];
        let scores = CalibrationScorer::default().score(&p, &votes, &trend, p.end_date).unwrap();
        prop_assert!(scores[0].score <= 0.0);
    }

    #[test]
    fn breakdown_scales_to_score(points in arb_trend(), starts in prop::collection::vec(0i64..14_400, 1..6)) {
        let p = settled_agree();
        let trend = trend_from(&p, &points);
        let votes: Vec<Vote> = starts
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let pos = if i % 2 == 0 { Position::Agree } else { Position::Disagree };
                Vote::new("p", format!("u{i}"), pos, p.created_at + Duration::minutes(*m))
            })
            .collect();
        let scorer = CalibrationScorer::default();
        let scores = scorer.score(&p, &votes, &trend, p.end_date).unwrap();
        let n = votes.len() as f64;
        for s in &scores {
            let b = scorer.score_participant(&p, &s.participant_id, &votes, &trend).unwrap().unwrap();
            prop_assert!((b.raw_score * n - s.score).abs() < 1e-6 * (1.0 + s.score.abs()));
        }
    }
}
