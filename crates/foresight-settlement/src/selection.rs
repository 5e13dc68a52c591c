//! Batch selection of predictions whose grace period has elapsed.

use chrono::{DateTime, Utc};
use foresight_core::models::Prediction;

use crate::OutcomeResolver;

/// Unsettled predictions eligible for settlement at `as_of`, oldest deadline first.
pub fn settleable<'a>(
    resolver: &OutcomeResolver,
    predictions: &'a [Prediction],
    as_of: DateTime<Utc>,
) -> Vec<&'a Prediction> {
    let mut due: Vec<&Prediction> = predictions
        .iter()
        .filter(|p| !p.settled && p.settleable_at(resolver.grace()) <= as_of)
        .collect();
    due.sort_by(|a, b| a.end_date.cmp(&b.end_date).then_with(|| a.id.cmp(&b.id)));
    due
}
