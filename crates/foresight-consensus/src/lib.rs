//! # foresight-consensus
//!
//! Time-weighted consensus probability for a yes/no prediction.
//!
//! Each qualifying vote weighs `cast_at − created_at`: later votes have seen
//! more of the world and count for more. The probability is the agree share
//! of the total weight, 0.5 when there is nothing to weigh.
//!
//! Also provides the active-vote tally (one vote per participant, latest wins).

pub mod accumulator;
pub mod estimator;
pub mod tally;
pub mod weights;

pub use accumulator::WeightAccumulator;
pub use estimator::ConsensusEstimator;
pub use tally::tally;
pub use weights::ConsensusBreakdown;
