use rusqlite::{params, Connection};

use foresight_core::errors::ForesightResult;
use foresight_core::models::TrendSnapshot;

use super::{decode_ts, encode_ts};
use crate::to_storage_err;

/// Drop the stored trend for a prediction and write `snapshots` in its place.
pub fn replace_trend(
    conn: &Connection,
    prediction_id: &str,
    snapshots: &[TrendSnapshot],
) -> ForesightResult<()> {
    conn.execute(
        "DELETE FROM trend_snapshots WHERE prediction_id = ?1",
        params![prediction_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO trend_snapshots (prediction_id, sequence, taken_at, consensus_probability)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    for snapshot in snapshots {
        stmt.execute(params![
            prediction_id,
            snapshot.sequence,
            encode_ts(snapshot.taken_at),
            snapshot.consensus_probability,
        ])
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}

pub fn get_trend(conn: &Connection, prediction_id: &str) -> ForesightResult<Vec<TrendSnapshot>> {
    let mut stmt = conn
        .prepare(
            "SELECT sequence, taken_at, consensus_probability FROM trend_snapshots
             WHERE prediction_id = ?1 ORDER BY taken_at",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![prediction_id], |row| {
            Ok((
                row.get::<_, u32>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut trend = Vec::new();
    for row in rows {
        let (sequence, taken_at, consensus_probability) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        trend.push(TrendSnapshot {
            prediction_id: prediction_id.to_string(),
            taken_at: decode_ts("trend_snapshots", &taken_at)?,
            consensus_probability,
            sequence,
        });
    }
    Ok(trend)
}
