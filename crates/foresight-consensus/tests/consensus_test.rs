use chrono::{DateTime, Duration, TimeZone, Utc};
use foresight_consensus::tally::tally;
use foresight_consensus::ConsensusEstimator;
use foresight_core::models::{Position, Prediction, Vote};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
}

fn prediction() -> Prediction {
    Prediction::new("p1", t0(), t0() + Duration::days(10))
}

fn vote(participant: &str, position: Position, at: DateTime<Utc>) -> Vote {
    Vote::new("p1", participant, position, at)
}

fn scenario_votes() -> Vec<Vote> {
    vec![
        vote("userA", Position::Agree, t0() + Duration::days(1)),
        vote("userB", Position::Disagree, t0() + Duration::days(9)),
    ]
}

#[test]
fn no_votes_yet_is_neutral() {
    let estimator = ConsensusEstimator::new();
    let p = estimator.compute(&prediction(), &scenario_votes(), t0() + Duration::hours(12));
    assert_eq!(p, 0.5);
}

#[test]
fn later_votes_weigh_more() {
    let estimator = ConsensusEstimator::new();
    let p = estimator.compute(&prediction(), &scenario_votes(), t0() + Duration::days(9));
    assert!((p - 0.1).abs() < 1e-12, "expected 0.1, got {p}");
}

#[test]
fn only_first_vote_counted_before_second() {
    let estimator = ConsensusEstimator::new();
    let p = estimator.compute(&prediction(), &scenario_votes(), t0() + Duration::days(5));
    assert_eq!(p, 1.0);
}

#[test]
fn vote_at_creation_has_zero_weight() {
    let estimator = ConsensusEstimator::new();
    let votes = vec![vote("a", Position::Agree, t0())];
    let breakdown = estimator.compute_breakdown(&prediction(), &votes, t0() + Duration::days(1));
    assert_eq!(breakdown.qualifying, 1);
    assert_eq!(breakdown.total_weight, 0.0);
    assert_eq!(breakdown.probability, 0.5);
}

#[test]
fn out_of_window_votes_are_skipped() {
    let estimator = ConsensusEstimator::new();
    let votes = vec![
        vote("early", Position::Agree, t0() - Duration::hours(1)),
        vote("a", Position::Disagree, t0() + Duration::days(2)),
        vote("late", Position::Agree, t0() + Duration::days(11)),
    ];
    let breakdown =
        estimator.compute_breakdown(&prediction(), &votes, t0() + Duration::days(20));
    assert_eq!(breakdown.out_of_window, 2);
    assert_eq!(breakdown.qualifying, 1);
    assert_eq!(breakdown.probability, 0.0);
}

#[test]
fn tally_over_scenario_counts_both_sides() {
    let t = tally(&scenario_votes(), t0() + Duration::days(10));
    assert_eq!(t.agree_count, 1);
    assert_eq!(t.disagree_count, 1);
    assert_eq!(t.total(), 2);
}
