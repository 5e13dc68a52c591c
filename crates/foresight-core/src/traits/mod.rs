//! Seams between the engine and its collaborators.

pub mod score_sink;
pub mod vote_source;

pub use score_sink::IScoreSink;
pub use vote_source::IVoteSource;
