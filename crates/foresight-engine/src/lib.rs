//! # foresight-engine
//!
//! Ties the algorithm crates to a collaborator store. Every operation reads
//! one immutable vote snapshot, computes purely, and persists through a
//! single write-set commit.

pub mod batch;
pub mod cancellation;
pub mod engine;

pub use batch::{BatchFailure, BatchReport};
pub use cancellation::CancellationToken;
pub use engine::ScoringEngine;
