//! Configuration system for Foresight.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod batch_config;
pub mod chart_config;
pub mod defaults;
pub mod foresight_config;
pub mod observability_config;
pub mod scoring_config;
pub mod settlement_config;
pub mod trend_config;

pub use batch_config::BatchConfig;
pub use chart_config::ChartConfig;
pub use foresight_config::ForesightConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;
pub use settlement_config::SettlementConfig;
pub use trend_config::TrendConfig;
