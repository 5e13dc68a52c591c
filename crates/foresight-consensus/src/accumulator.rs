use chrono::{DateTime, Utc};
use foresight_core::constants::NEUTRAL_PROBABILITY;
use foresight_core::models::{Position, Vote};
use foresight_core::time::millis_between;

/// Running agree/total weights, for callers that sweep votes in time order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightAccumulator {
    agree_weight: f64,
    total_weight: f64,
}

impl WeightAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one vote, weighted by its distance from `created_at`.
    pub fn add(&mut self, created_at: DateTime<Utc>, vote: &Vote) {
        let weight = millis_between(created_at, vote.cast_at);
        if vote.position == Position::Agree {
            self.agree_weight += weight;
        }
        self.total_weight += weight;
    }

    pub fn agree_weight(&self) -> f64 {
        self.agree_weight
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Agree share of the weight so far, 0.5 while the total is zero.
    pub fn probability(&self) -> f64 {
        if self.total_weight > 0.0 {
            (self.agree_weight / self.total_weight).clamp(0.0, 1.0)
        } else {
            NEUTRAL_PROBABILITY
        }
    }
}
