use serde::{Deserialize, Serialize};

use super::defaults;

/// Batch runner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Worker threads for fan-out across predictions. 0 uses the rayon default.
    pub worker_threads: usize,
    /// Predictions handed to the pool per round; cancellation is checked between rounds too.
    pub page_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            worker_threads: defaults::DEFAULT_WORKER_THREADS,
            page_size: defaults::DEFAULT_BATCH_PAGE_SIZE,
        }
    }
}
