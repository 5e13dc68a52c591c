use serde::{Deserialize, Serialize};

use super::defaults;

/// Aggregate chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Number of points a downsampled chart is reduced to.
    pub point_count: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            point_count: defaults::DEFAULT_CHART_POINT_COUNT,
        }
    }
}
