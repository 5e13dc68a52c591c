use rusqlite::{params, Connection, OptionalExtension};

use foresight_core::errors::ForesightResult;
use foresight_core::models::Prediction;

use super::{decode_ts, encode_ts};
use crate::to_storage_err;

const COLUMNS: &str =
    "id, created_at, end_date, settled, final_probability, current_probability";

/// Insert or fully overwrite a prediction row.
pub fn upsert_prediction(conn: &Connection, prediction: &Prediction) -> ForesightResult<()> {
    conn.execute(
        "INSERT INTO predictions (id, created_at, end_date, settled, final_probability, current_probability)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
            created_at = excluded.created_at,
            end_date = excluded.end_date,
            settled = excluded.settled,
            final_probability = excluded.final_probability,
            current_probability = excluded.current_probability",
        params![
            prediction.id,
            encode_ts(prediction.created_at),
            encode_ts(prediction.end_date),
            prediction.settled as i32,
            prediction.final_probability,
            prediction.current_probability,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_prediction(conn: &Connection, id: &str) -> ForesightResult<Option<Prediction>> {
    let raw = conn
        .query_row(
            &format!("SELECT {COLUMNS} FROM predictions WHERE id = ?1"),
            params![id],
            read_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(RawPrediction::decode).transpose()
}

/// All predictions, earliest end date first.
pub fn list_predictions(conn: &Connection) -> ForesightResult<Vec<Prediction>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {COLUMNS} FROM predictions ORDER BY end_date, id"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], read_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        out.push(raw.decode()?);
    }
    Ok(out)
}

struct RawPrediction {
    id: String,
    created_at: String,
    end_date: String,
    settled: bool,
    final_probability: f64,
    current_probability: f64,
}

impl RawPrediction {
    fn decode(self) -> ForesightResult<Prediction> {
        Ok(Prediction {
            created_at: decode_ts("predictions", &self.created_at)?,
            end_date: decode_ts("predictions", &self.end_date)?,
            id: self.id,
            settled: self.settled,
            final_probability: self.final_probability,
            current_probability: self.current_probability,
        })
    }
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawPrediction> {
    Ok(RawPrediction {
        id: row.get(0)?,
        created_at: row.get(1)?,
        end_date: row.get(2)?,
        settled: row.get::<_, i32>(3)? != 0,
        final_probability: row.get(4)?,
        current_probability: row.get(5)?,
    })
}
