//! # foresight-trend
//!
//! Trend history for a prediction, rebuilt from scratch on every run:
//! - consensus snapshots at most once per spacing window (default one hour),
//!   always including the creation time and the closing boundary
//! - cumulative vote activity per fixed period
//! - stride downsampling of either series to a fixed chart width

pub mod activity;
pub mod builder;
pub mod chart;

pub use activity::build_activity;
pub use builder::TrendBuilder;
pub use chart::downsample;
