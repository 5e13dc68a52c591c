//! # foresight-calibration
//!
//! Scores each participant of a settled prediction by integrating, over time,
//! how far the consensus was from the outcome while they held their position.
//! Holding the outcome-matching side while the crowd doubted it pays the most.

pub mod merge;
pub mod scorer;
pub mod segment;

pub use merge::{Boundary, BoundaryMerge, Source};
pub use scorer::{CalibrationScorer, ParticipantBreakdown};
