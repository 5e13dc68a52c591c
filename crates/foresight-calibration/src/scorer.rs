use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use foresight_core::config::ScoringConfig;
use foresight_core::constants::NEUTRAL_PROBABILITY;
use foresight_core::errors::ScoringError;
use foresight_core::models::{CalibrationScore, Position, Prediction, TrendSnapshot, Vote};
use tracing::debug;

use crate::merge::BoundaryMerge;
use crate::segment;

/// Unscaled result for one participant, for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantBreakdown {
    pub participant_id: String,
    /// Earliest qualifying vote; integration starts here.
    pub first_vote: DateTime<Utc>,
    /// Sum of segment rewards before the `C · N` scaling.
    pub raw_score: f64,
    pub segment_count: usize,
}

/// Scores every participant of a settled prediction.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationScorer {
    count_excluded_in_population: bool,
}

impl CalibrationScorer {
    pub fn new(count_excluded_in_population: bool) -> Self {
        Self {
            count_excluded_in_population,
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(config.count_excluded_in_population)
    }

    /// One score per participant holding a vote strictly before the end date,
    /// ordered by participant id. `final = raw · C · N`.
    pub fn score(
        &self,
        prediction: &Prediction,
        votes: &[Vote],
        trend: &[TrendSnapshot],
        computed_at: DateTime<Utc>,
    ) -> Result<Vec<CalibrationScore>, ScoringError> {
        let (outcome, confidence) = settled_outcome(prediction)?;
        let series = TrendSeries::new(prediction, trend)?;

        let everyone: BTreeSet<&str> = votes.iter().map(|v| v.participant_id.as_str()).collect();
        let qualifying = qualifying_votes(prediction, votes);
        let population = if self.count_excluded_in_population {
            everyone.len()
        } else {
            qualifying.len()
        };
        let scale = confidence * population as f64;

        let excluded = everyone.len() - qualifying.len();
        if excluded > 0 {
            debug!(
                prediction_id = %prediction.id,
                excluded,
                "participants without a pre-deadline vote left unscored"
            );
        }

        let scores: Vec<CalibrationScore> = qualifying
            .into_iter()
            .filter_map(|(participant, history)| {
                integrate(prediction, outcome, participant, &history, &series)
            })
            .map(|breakdown| CalibrationScore {
                prediction_id: prediction.id.clone(),
                participant_id: breakdown.participant_id,
                score: breakdown.raw_score * scale,
                computed_at,
            })
            .collect();

        debug!(
            prediction_id = %prediction.id,
            scored = scores.len(),
            population,
            confidence,
            "calibration scores computed"
        );
        Ok(scores)
    }

    /// Unscaled breakdown for a single participant. `Ok(None)` when they have
    /// no qualifying vote.
    pub fn score_participant(
        &self,
        prediction: &Prediction,
        participant_id: &str,
        votes: &[Vote],
        trend: &[TrendSnapshot],
    ) -> Result<Option<ParticipantBreakdown>, ScoringError> {
        let (outcome, _) = settled_outcome(prediction)?;
        let series = TrendSeries::new(prediction, trend)?;
        let history = qualifying_votes(prediction, votes)
            .remove(participant_id)
            .unwrap_or_default();
        Ok(integrate(prediction, outcome, participant_id, &history, &series))
    }
}

impl Default for CalibrationScorer {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

fn settled_outcome(prediction: &Prediction) -> Result<(Position, f64), ScoringError> {
    match (prediction.outcome(), prediction.confidence_index()) {
        (Some(outcome), Some(confidence)) => Ok((outcome, confidence)),
        _ => Err(ScoringError::NotSettled {
            prediction_id: prediction.id.clone(),
        }),
    }
}

/// In-window votes cast before the end date, grouped per participant and
/// sorted by `cast_at`. Equal timestamps keep input order.
fn qualifying_votes<'a>(
    prediction: &Prediction,
    votes: &'a [Vote],
) -> BTreeMap<&'a str, Vec<&'a Vote>> {
    let mut grouped: BTreeMap<&str, Vec<&Vote>> = BTreeMap::new();
    let mut skipped = 0usize;
    for vote in votes {
        if !prediction.contains(vote.cast_at) {
            skipped += 1;
            continue;
        }
        if vote.cast_at < prediction.end_date {
            grouped
                .entry(vote.participant_id.as_str())
                .or_default()
                .push(vote);
        }
    }
    if skipped > 0 {
        debug!(prediction_id = %prediction.id, skipped, "ignored votes outside the prediction window");
    }
    for history in grouped.values_mut() {
        history.sort_by_key(|v| v.cast_at);
    }
    grouped
}

/// Trend snapshots up to the end date, split into parallel columns.
struct TrendSeries {
    times: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl TrendSeries {
    fn new(prediction: &Prediction, trend: &[TrendSnapshot]) -> Result<Self, ScoringError> {
        if trend.is_empty() {
            return Err(ScoringError::EmptyTrend {
                prediction_id: prediction.id.clone(),
            });
        }
        let mut ordered: Vec<&TrendSnapshot> = trend
            .iter()
            .filter(|s| s.taken_at <= prediction.end_date)
            .collect();
        ordered.sort_by_key(|s| s.taken_at);
        Ok(Self {
            times: ordered.iter().map(|s| s.taken_at).collect(),
            values: ordered.iter().map(|s| s.consensus_probability).collect(),
        })
    }
}

/// Walk the merged boundaries of one participant's votes and the trend,
/// accumulating a reward for every segment from their first vote to the end
/// date. Held position and reference value are those in force at each
/// segment's start.
fn integrate(
    prediction: &Prediction,
    outcome: Position,
    participant_id: &str,
    history: &[&Vote],
    series: &TrendSeries,
) -> Option<ParticipantBreakdown> {
    let first_vote = history.first()?.cast_at;
    let vote_times: Vec<DateTime<Utc>> = history.iter().map(|v| v.cast_at).collect();
    let end = prediction.end_date;

    let (mut vi, mut ti) = (0, 0);
    let mut held: Option<Position> = None;
    let mut reference = NEUTRAL_PROBABILITY;
    let mut open: Option<DateTime<Utc>> = None;
    let mut raw_score = 0.0;
    let mut segment_count = 0;

    for boundary in BoundaryMerge::new(&vote_times, &series.times).take_while(|b| b.at < end) {
        if let (Some(start), Some(position)) = (open, held) {
            raw_score += segment::reward(position, outcome, reference, start, boundary.at);
            segment_count += 1;
        }
        if boundary.source.has_vote() {
            while vi < history.len() && history[vi].cast_at <= boundary.at {
                held = Some(history[vi].position);
                vi += 1;
            }
        }
        if boundary.source.has_trend() {
            while ti < series.times.len() && series.times[ti] <= boundary.at {
                reference = series.values[ti];
                ti += 1;
            }
        }
        if held.is_some() {
            open = Some(boundary.at);
        }
    }

    // The last segment always closes at the end date.
    if let (Some(start), Some(position)) = (open, held) {
        raw_score += segment::reward(position, outcome, reference, start, end);
        segment_count += 1;
    }

    Some(ParticipantBreakdown {
        participant_id: participant_id.to_string(),
        first_vote,
        raw_score,
        segment_count,
    })
}
