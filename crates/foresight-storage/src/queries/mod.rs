//! Row-level reads and writes. Every function takes a borrowed connection so
//! callers decide the transaction scope.

pub mod prediction_ops;
pub mod score_ops;
pub mod trend_ops;
pub mod vote_ops;

use chrono::{DateTime, SecondsFormat, Utc};
use foresight_core::errors::{ForesightError, ForesightResult, StorageError};

/// Fixed-width RFC 3339 so stored timestamps sort lexically.
pub(crate) fn encode_ts(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub(crate) fn decode_ts(table: &str, raw: &str) -> ForesightResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| corrupt(table, format!("parse datetime '{raw}': {e}")))
}

pub(crate) fn corrupt(table: &str, details: String) -> ForesightError {
    ForesightError::StorageError(StorageError::CorruptRow {
        table: table.to_string(),
        details,
    })
}
