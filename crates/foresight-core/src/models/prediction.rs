use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::Position;
use crate::constants::NEUTRAL_PROBABILITY;
use crate::errors::{ForesightError, ForesightResult};

/// A yes/no statement with a resolution date.
///
/// `final_probability` is only meaningful once `settled` is true.
/// `current_probability` is the latest consensus written by a trend rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub settled: bool,
    pub final_probability: f64,
    pub current_probability: f64,
}

impl Prediction {
    /// A fresh, unsettled prediction with neutral probabilities.
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at,
            end_date,
            settled: false,
            final_probability: NEUTRAL_PROBABILITY,
            current_probability: NEUTRAL_PROBABILITY,
        }
    }

    /// Reject an inverted window. Stores are expected to never hand one out.
    pub fn validate(&self) -> ForesightResult<()> {
        if self.end_date < self.created_at {
            return Err(ForesightError::InvalidPrediction {
                id: self.id.clone(),
                reason: format!(
                    "end date {} precedes creation {}",
                    self.end_date, self.created_at
                ),
            });
        }
        Ok(())
    }

    /// Whether `at` falls inside `[created_at, end_date]`.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.created_at && at <= self.end_date
    }

    /// Earliest instant at which settlement is allowed.
    pub fn settleable_at(&self, grace: Duration) -> DateTime<Utc> {
        self.end_date + grace
    }

    /// Resolved outcome label, once settled.
    pub fn outcome(&self) -> Option<Position> {
        self.settled
            .then(|| Position::from_probability(self.final_probability))
    }

    /// `2·|final − 0.5|`, once settled.
    pub fn confidence_index(&self) -> Option<f64> {
        self.settled
            .then(|| 2.0 * (self.final_probability - NEUTRAL_PROBABILITY).abs())
    }
}
