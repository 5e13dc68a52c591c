use serde::{Deserialize, Serialize};

use super::defaults;

/// Calibration scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Count participants without a pre-deadline vote in the population
    /// multiplier `N`. They still get no score row either way.
    pub count_excluded_in_population: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            count_excluded_in_population: defaults::DEFAULT_COUNT_EXCLUDED_IN_POPULATION,
        }
    }
}
