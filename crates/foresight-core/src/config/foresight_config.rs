//! Top-level Foresight configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::{
    BatchConfig, ChartConfig, ObservabilityConfig, ScoringConfig, SettlementConfig, TrendConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FORESIGHT_*`)
/// 2. Project config (`foresight.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ForesightConfig {
    pub settlement: SettlementConfig,
    pub trend: TrendConfig,
    pub scoring: ScoringConfig,
    pub chart: ChartConfig,
    pub batch: BatchConfig,
    pub observability: ObservabilityConfig,
}

impl ForesightConfig {
    /// Load configuration for a project root.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file. Missing sections and keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `FORESIGHT_*` overrides read through `lookup`.
    /// Unparseable values are ignored and the lower layer wins.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("FORESIGHT_GRACE_HOURS").and_then(|v| v.parse().ok()) {
            self.settlement.grace_hours = v;
        }
        if let Some(v) = lookup("FORESIGHT_TREND_MIN_SPACING_MINUTES").and_then(|v| v.parse().ok())
        {
            self.trend.min_spacing_minutes = v;
        }
        if let Some(v) = lookup("FORESIGHT_TREND_ACTIVITY_PERIOD_HOURS").and_then(|v| v.parse().ok())
        {
            self.trend.activity_period_hours = v;
        }
        if let Some(v) = lookup("FORESIGHT_SCORING_COUNT_EXCLUDED").and_then(|v| v.parse().ok()) {
            self.scoring.count_excluded_in_population = v;
        }
        if let Some(v) = lookup("FORESIGHT_CHART_POINT_COUNT").and_then(|v| v.parse().ok()) {
            self.chart.point_count = v;
        }
        if let Some(v) = lookup("FORESIGHT_BATCH_WORKER_THREADS").and_then(|v| v.parse().ok()) {
            self.batch.worker_threads = v;
        }
        if let Some(v) = lookup("FORESIGHT_BATCH_PAGE_SIZE").and_then(|v| v.parse().ok()) {
            self.batch.page_size = v;
        }
        if let Some(v) = lookup("FORESIGHT_LOG_LEVEL") {
            self.observability.log_level = v;
        }
        if let Some(v) = lookup("FORESIGHT_LOG_JSON").and_then(|v| v.parse().ok()) {
            self.observability.json = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trend.min_spacing_minutes == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "trend.min_spacing_minutes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.trend.activity_period_hours == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "trend.activity_period_hours".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.chart.point_count == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "chart.point_count".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.batch.page_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "batch.page_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("unknown level '{}'", self.observability.log_level),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
