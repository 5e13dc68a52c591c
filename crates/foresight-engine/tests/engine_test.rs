use chrono::{DateTime, Duration, TimeZone, Utc};
use foresight_calibration::CalibrationScorer;
use foresight_core::config::ForesightConfig;
use foresight_core::errors::{ForesightError, ScoringError};
use foresight_core::models::{Position, Prediction, Vote};
use foresight_core::traits::{IScoreSink, IVoteSource};
use foresight_engine::ScoringEngine;
use foresight_storage::{MemoryStore, SqliteStore};
use foresight_trend::TrendBuilder;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn prediction() -> Prediction {
    Prediction::new("p1", t0(), t0() + Duration::days(10))
}

fn votes() -> Vec<Vote> {
    vec![
        Vote::new("p1", "userA", Position::Agree, t0() + Duration::days(1)),
        Vote::new("p1", "userB", Position::Disagree, t0() + Duration::days(9)),
    ]
}

fn memory_engine() -> ScoringEngine<MemoryStore> {
    let store = MemoryStore::new();
    store.insert_prediction(&prediction()).unwrap();
    store.insert_votes(&votes()).unwrap();
    ScoringEngine::with_defaults(store).unwrap()
}

fn sqlite_engine() -> ScoringEngine<SqliteStore> {
    let store = SqliteStore::open_in_memory().unwrap();
    store.insert_prediction(&prediction()).unwrap();
    store.insert_votes(&votes()).unwrap();
    ScoringEngine::with_defaults(store).unwrap()
}

#[test]
fn unknown_prediction_is_reported() {
    let engine = memory_engine();
    let err = engine.settle("ghost", t0()).unwrap_err();
    assert!(matches!(err, ForesightError::PredictionNotFound { ref id } if id == "ghost"));
    assert!(engine.downsample("ghost", 10).is_err());
}

#[test]
fn rebuild_on_open_prediction_refreshes_current_probability() {
    let engine = sqlite_engine();
    let trend = engine.rebuild_trend("p1", t0() + Duration::days(2)).unwrap();
    assert_eq!(trend.last().unwrap().taken_at, t0() + Duration::days(2));

    let stored = engine.store().get_prediction("p1").unwrap().unwrap();
    assert_eq!(stored.current_probability, 1.0);
    assert!(!stored.settled);
    assert_eq!(engine.store().get_trend("p1").unwrap(), trend);
}

#[test]
fn rebuild_replaces_previous_snapshots() {
    let engine = sqlite_engine();
    engine.rebuild_trend("p1", t0() + Duration::days(2)).unwrap();
    let full = engine.rebuild_trend("p1", t0() + Duration::days(20)).unwrap();
    assert_eq!(full.len(), 4);
    assert_eq!(engine.store().get_trend("p1").unwrap(), full);
    let stored = engine.store().get_prediction("p1").unwrap().unwrap();
    assert!((stored.current_probability - 0.1).abs() < 1e-12);
}

#[test]
fn rescoring_unsettled_prediction_fails() {
    let engine = memory_engine();
    let err = engine
        .rescore_participants("p1", t0() + Duration::days(20))
        .unwrap_err();
    assert!(matches!(
        err,
        ForesightError::ScoringError(ScoringError::NotSettled { .. })
    ));
    assert!(engine.store().get_scores("p1").unwrap().is_empty());
}

#[test]
fn rescore_without_stored_trend_builds_one() {
    let engine = sqlite_engine();
    let as_of = t0() + Duration::days(14);
    assert!(engine.settle("p1", as_of).unwrap().is_settled_now());
    let scores = engine.rescore_participants("p1", as_of).unwrap();
    assert_eq!(scores.len(), 2);
    assert!((scores[0].score + 311.04).abs() < 1e-6);
    assert_eq!(scores[0].computed_at, as_of);

    let stored = engine.store().get_trend("p1").unwrap();
    assert_eq!(stored.last().unwrap().taken_at, prediction().end_date);
}

#[test]
fn rescore_ignores_trend_stored_while_open() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.insert_prediction(&prediction()).unwrap();
    store.insert_votes(&votes()[..1]).unwrap();
    let engine = ScoringEngine::with_defaults(store).unwrap();

    // Stored trend closes at day 2 and has not seen userB.
    engine.rebuild_trend("p1", t0() + Duration::days(2)).unwrap();
    engine.store().insert_votes(&votes()[1..]).unwrap();

    let as_of = t0() + Duration::days(14);
    assert!(engine.settle("p1", as_of).unwrap().is_settled_now());
    let scores = engine.rescore_participants("p1", as_of).unwrap();

    let settled = engine.store().get_prediction("p1").unwrap().unwrap();
    let all_votes = engine.store().get_votes("p1").unwrap();
    let fresh = TrendBuilder::default().build(&settled, &all_votes, as_of);
    let expected = CalibrationScorer::default()
        .score(&settled, &all_votes, &fresh, as_of)
        .unwrap();
    assert_eq!(scores, expected);
    assert!((scores[0].score + 311.04).abs() < 1e-6);
    assert!((scores[1].score - 3.84).abs() < 1e-6);

    let stored = engine.store().get_trend("p1").unwrap();
    assert_eq!(stored, fresh);
    assert_eq!(stored.last().unwrap().taken_at, settled.end_date);
    assert_eq!(engine.store().get_scores("p1").unwrap(), scores);
}

#[test]
fn rescore_overwrites_prior_rows() {
    let engine = sqlite_engine();
    let as_of = t0() + Duration::days(14);
    engine.settle("p1", as_of).unwrap();
    engine.rebuild_trend("p1", as_of).unwrap();
    let first = engine.rescore_participants("p1", as_of).unwrap();
    let later = as_of + Duration::days(1);
    let second = engine.rescore_participants("p1", later).unwrap();
    let stored = engine.store().get_scores("p1").unwrap();
    assert_eq!(stored, second);
    assert_eq!(stored.len(), first.len());
    assert!(stored.iter().all(|s| s.computed_at == later));
}

#[test]
fn downsample_and_chart_read_stored_trend() {
    let engine = memory_engine();
    assert!(engine.downsample("p1", 50).unwrap().is_empty());
    engine.rebuild_trend("p1", t0() + Duration::days(20)).unwrap();
    let values = engine.downsample("p1", 50).unwrap();
    assert_eq!(values.len(), 4);
    assert_eq!(values[0], 0.5);
    assert_eq!(engine.chart("p1").unwrap(), values);
    assert_eq!(engine.downsample("p1", 2).unwrap().len(), 1);
}

#[test]
fn zero_point_downsample_is_empty() {
    let engine = memory_engine();
    engine.rebuild_trend("p1", t0() + Duration::days(20)).unwrap();
    assert!(engine.downsample("p1", 0).unwrap().is_empty());
    engine.rebuild_trend("p1", t0()).unwrap();
    assert_eq!(engine.store().get_trend("p1").unwrap().len(), 1);
    assert!(engine.downsample("p1", 0).unwrap().is_empty());
}

#[test]
fn tally_and_activity() {
    let engine = memory_engine();
    let tally = engine.tally("p1", t0() + Duration::days(5)).unwrap();
    assert_eq!((tally.agree_count, tally.disagree_count), (1, 0));
    let tally = engine.tally("p1", t0() + Duration::days(10)).unwrap();
    assert_eq!(tally.total(), 2);
    assert_eq!(tally.last_vote_at, Some(t0() + Duration::days(9)));

    let activity = engine
        .activity("p1", t0(), t0() + Duration::days(10), Duration::days(1))
        .unwrap();
    assert_eq!(activity.len(), 9);
    assert_eq!(activity[0].agree_ratio, 0.5);
    assert_eq!(activity[1].agree, 1);
    assert_eq!(activity[8].agree_ratio, 1.0);

    let chart = engine.activity_chart("p1", t0() + Duration::days(30)).unwrap();
    assert_eq!(chart.len(), 9);
}

#[test]
fn current_probability_is_read_only() {
    let engine = memory_engine();
    let p = engine
        .current_probability("p1", t0() + Duration::days(9))
        .unwrap();
    assert!((p - 0.1).abs() < 1e-12);
    assert!(engine.store().get_trend("p1").unwrap().is_empty());
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = ForesightConfig::default();
    config.chart.point_count = 0;
    let err = ScoringEngine::new(MemoryStore::new(), config).err().unwrap();
    assert!(matches!(err, ForesightError::ConfigError(_)));
}

#[test]
fn custom_spacing_and_grace_flow_through() {
    let store = MemoryStore::new();
    store
        .insert_prediction(&Prediction::new("p1", t0(), t0() + Duration::days(1)))
        .unwrap();
    store
        .insert_votes(&[
            Vote::new("p1", "a", Position::Agree, t0() + Duration::minutes(20)),
            Vote::new("p1", "b", Position::Agree, t0() + Duration::minutes(45)),
        ])
        .unwrap();
    let config = ForesightConfig::from_toml(
        "[trend]\nmin_spacing_minutes = 15\n[settlement]\ngrace_hours = 0\n",
    )
    .unwrap();
    let engine = ScoringEngine::new(store, config).unwrap();

    let trend = engine.rebuild_trend("p1", t0() + Duration::days(2)).unwrap();
    assert_eq!(trend.len(), 4);
    assert!(engine
        .settle("p1", t0() + Duration::days(1))
        .unwrap()
        .is_settled_now());
}
