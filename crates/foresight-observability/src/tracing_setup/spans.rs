//! Span definitions per engine operation.

/// Create a settlement span.
#[macro_export]
macro_rules! settlement_span {
    ($prediction_id:expr) => {
        tracing::info_span!("foresight.settlement", prediction_id = %$prediction_id)
    };
}

/// Create a trend rebuild span.
#[macro_export]
macro_rules! trend_span {
    ($prediction_id:expr, $vote_count:expr) => {
        tracing::info_span!(
            "foresight.trend",
            prediction_id = %$prediction_id,
            vote_count = $vote_count
        )
    };
}

/// Create a calibration scoring span.
#[macro_export]
macro_rules! calibration_span {
    ($prediction_id:expr) => {
        tracing::info_span!("foresight.calibration", prediction_id = %$prediction_id)
    };
}

/// Create a batch run span.
#[macro_export]
macro_rules! batch_span {
    ($candidate_count:expr) => {
        tracing::info_span!("foresight.batch", candidates = $candidate_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SETTLEMENT: &str = "foresight.settlement";
    pub const TREND: &str = "foresight.trend";
    pub const CALIBRATION: &str = "foresight.calibration";
    pub const BATCH: &str = "foresight.batch";
}
