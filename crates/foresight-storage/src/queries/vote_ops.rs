use rusqlite::{params, Connection};

use foresight_core::errors::ForesightResult;
use foresight_core::models::{Position, Vote};

use super::{corrupt, decode_ts, encode_ts};
use crate::to_storage_err;

pub fn insert_vote(conn: &Connection, vote: &Vote) -> ForesightResult<()> {
    conn.execute(
        "INSERT INTO votes (prediction_id, participant_id, position, cast_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            vote.prediction_id,
            vote.participant_id,
            vote.position.as_str(),
            encode_ts(vote.cast_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Votes for one prediction, ascending by `cast_at`, then insertion order.
pub fn get_votes(conn: &Connection, prediction_id: &str) -> ForesightResult<Vec<Vote>> {
    let mut stmt = conn
        .prepare(
            "SELECT participant_id, position, cast_at FROM votes
             WHERE prediction_id = ?1 ORDER BY cast_at, id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![prediction_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut votes = Vec::new();
    for row in rows {
        let (participant_id, position, cast_at) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let position: Position = position.parse().map_err(|e: String| corrupt("votes", e))?;
        votes.push(Vote {
            prediction_id: prediction_id.to_string(),
            participant_id,
            position,
            cast_at: decode_ts("votes", &cast_at)?,
        });
    }
    Ok(votes)
}
