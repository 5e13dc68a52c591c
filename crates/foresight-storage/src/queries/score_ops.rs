use rusqlite::{params, Connection};

use foresight_core::errors::ForesightResult;
use foresight_core::models::CalibrationScore;

use super::{decode_ts, encode_ts};
use crate::to_storage_err;

/// Drop every stored score for a prediction and write `scores` in their place.
pub fn replace_scores(
    conn: &Connection,
    prediction_id: &str,
    scores: &[CalibrationScore],
) -> ForesightResult<()> {
    conn.execute(
        "DELETE FROM calibration_scores WHERE prediction_id = ?1",
        params![prediction_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO calibration_scores (prediction_id, participant_id, score, computed_at)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    for score in scores {
        stmt.execute(params![
            prediction_id,
            score.participant_id,
            score.score,
            encode_ts(score.computed_at),
        ])
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}

pub fn get_scores(conn: &Connection, prediction_id: &str) -> ForesightResult<Vec<CalibrationScore>> {
    query_scores(
        conn,
        "SELECT prediction_id, participant_id, score, computed_at FROM calibration_scores
         WHERE prediction_id = ?1 ORDER BY participant_id",
        prediction_id,
    )
}

/// One participant's scores across predictions, most recent first.
pub fn get_participant_scores(
    conn: &Connection,
    participant_id: &str,
) -> ForesightResult<Vec<CalibrationScore>> {
    query_scores(
        conn,
        "SELECT prediction_id, participant_id, score, computed_at FROM calibration_scores
         WHERE participant_id = ?1 ORDER BY computed_at DESC, prediction_id",
        participant_id,
    )
}

fn query_scores(conn: &Connection, sql: &str, key: &str) -> ForesightResult<Vec<CalibrationScore>> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![key], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, String>(3)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut scores = Vec::new();
    for row in rows {
        let (prediction_id, participant_id, score, computed_at) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        scores.push(CalibrationScore {
            prediction_id,
            participant_id,
            score,
            computed_at: decode_ts("calibration_scores", &computed_at)?,
        });
    }
    Ok(scores)
}
