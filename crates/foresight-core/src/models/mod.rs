//! Data model shared across the workspace.

pub mod activity;
pub mod calibration_score;
pub mod position;
pub mod prediction;
pub mod settlement;
pub mod tally;
pub mod trend_snapshot;
pub mod vote;
pub mod write_set;

pub use activity::ActivitySnapshot;
pub use calibration_score::CalibrationScore;
pub use position::Position;
pub use prediction::Prediction;
pub use settlement::Settlement;
pub use tally::VoteTally;
pub use trend_snapshot::TrendSnapshot;
pub use vote::Vote;
pub use write_set::WriteSet;
