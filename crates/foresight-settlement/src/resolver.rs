use chrono::{DateTime, Duration, Utc};
use foresight_consensus::ConsensusEstimator;
use foresight_core::config::SettlementConfig;
use foresight_core::models::{Position, Prediction, Settlement, Vote};
use tracing::{debug, info};

/// Decides whether a prediction can be settled and what it settles to.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeResolver {
    grace: Duration,
    estimator: ConsensusEstimator,
}

impl OutcomeResolver {
    pub fn new(grace: Duration) -> Self {
        Self {
            grace,
            estimator: ConsensusEstimator::new(),
        }
    }

    pub fn from_config(config: &SettlementConfig) -> Self {
        Self::new(config.grace())
    }

    pub fn grace(&self) -> Duration {
        self.grace
    }

    /// Attempt settlement as of `as_of`.
    ///
    /// The final probability is the consensus at `end_date` over all supplied
    /// votes. Settling exactly at `end_date + grace` is allowed.
    pub fn settle(
        &self,
        prediction: &Prediction,
        votes: &[Vote],
        as_of: DateTime<Utc>,
    ) -> Settlement {
        if prediction.settled {
            return Settlement::AlreadySettled;
        }

        let eligible_at = prediction.settleable_at(self.grace);
        if as_of < eligible_at {
            debug!(prediction_id = %prediction.id, %eligible_at, "grace period not elapsed");
            return Settlement::NotYetSettleable { eligible_at };
        }

        let final_probability = self.estimator.compute(prediction, votes, prediction.end_date);
        let outcome = Position::from_probability(final_probability);
        info!(
            prediction_id = %prediction.id,
            final_probability,
            outcome = outcome.as_str(),
            "prediction settled"
        );
        Settlement::Settled {
            final_probability,
            outcome,
        }
    }

    /// Write a settlement result onto `prediction`. Returns whether it changed.
    pub fn apply(prediction: &mut Prediction, settlement: &Settlement) -> bool {
        match settlement {
            Settlement::Settled {
                final_probability, ..
            } => {
                prediction.settled = true;
                prediction.final_probability = *final_probability;
                prediction.current_probability = *final_probability;
                true
            }
            Settlement::AlreadySettled | Settlement::NotYetSettleable { .. } => false,
        }
    }
}

impl Default for OutcomeResolver {
    fn default() -> Self {
        Self::from_config(&SettlementConfig::default())
    }
}
