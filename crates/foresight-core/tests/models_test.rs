use chrono::{Duration, TimeZone, Utc};
use foresight_core::models::*;
use foresight_core::ForesightError;

fn t0() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

#[test]
fn new_prediction_is_open_and_neutral() {
    let p = Prediction::new("p1", t0(), t0() + Duration::days(10));
    assert!(!p.settled);
    assert_eq!(p.current_probability, 0.5);
    assert_eq!(p.outcome(), None);
    assert_eq!(p.confidence_index(), None);
    assert!(p.validate().is_ok());
}

#[test]
fn inverted_window_fails_validation() {
    let p = Prediction::new("p1", t0(), t0() - Duration::hours(1));
    let err = p.validate().unwrap_err();
    assert!(matches!(err, ForesightError::InvalidPrediction { ref id, .. } if id == "p1"));
}

#[test]
fn window_bounds_are_inclusive() {
    let p = Prediction::new("p1", t0(), t0() + Duration::days(1));
    assert!(p.contains(t0()));
    assert!(p.contains(t0() + Duration::days(1)));
    assert!(!p.contains(t0() - Duration::seconds(1)));
    assert!(!p.contains(t0() + Duration::days(1) + Duration::seconds(1)));
}

#[test]
fn outcome_and_confidence_follow_final_probability() {
    let mut p = Prediction::new("p1", t0(), t0() + Duration::days(1));
    p.settled = true;

    p.final_probability = 0.5;
    assert_eq!(p.outcome(), Some(Position::Agree));
    assert_eq!(p.confidence_index(), Some(0.0));

    p.final_probability = 0.1;
    assert_eq!(p.outcome(), Some(Position::Disagree));
    assert!((p.confidence_index().unwrap() - 0.8).abs() < 1e-12);

    p.final_probability = 1.0;
    assert_eq!(p.confidence_index(), Some(1.0));
}

#[test]
fn settleable_at_adds_grace() {
    let p = Prediction::new("p1", t0(), t0() + Duration::days(10));
    assert_eq!(
        p.settleable_at(Duration::hours(72)),
        t0() + Duration::days(10) + Duration::hours(72)
    );
}

#[test]
fn position_parses_and_displays() {
    assert_eq!("agree".parse::<Position>().unwrap(), Position::Agree);
    assert_eq!("disagree".parse::<Position>().unwrap(), Position::Disagree);
    assert!("maybe".parse::<Position>().is_err());
    assert_eq!(Position::Agree.to_string(), "agree");
    assert_eq!(Position::Agree.opposite(), Position::Disagree);
    assert_eq!(Position::Agree.indicator(), 1.0);
    assert_eq!(Position::Disagree.indicator(), 0.0);
}

#[test]
fn write_set_emptiness() {
    let mut ws = WriteSet::new("p1");
    assert!(ws.is_empty());
    ws.scores = Some(vec![]);
    assert!(!ws.is_empty());
}

#[test]
fn settlement_serializes_with_status_tag() {
    let s = Settlement::Settled {
        final_probability: 0.75,
        outcome: Position::Agree,
    };
    assert!(s.is_settled_now());
    assert!(!Settlement::AlreadySettled.is_settled_now());
    let value = serde_json::to_value(&s).unwrap();
    assert_eq!(value["status"], "settled");
    assert_eq!(value["outcome"], "agree");
}
