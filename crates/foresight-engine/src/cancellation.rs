//! Stop signal for a running batch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag a caller flips to stop [`run_batch`](crate::ScoringEngine::run_batch)
/// from starting further predictions. Clones observe the same flag.
///
/// A prediction already being processed when the flag flips still commits.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    stop: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the batch to stop. Idempotent.
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }
}
