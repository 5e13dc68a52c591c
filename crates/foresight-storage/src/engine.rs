//! SqliteStore: owns one connection, runs migrations on open, and implements
//! the vote-source and score-sink seams.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::warn;

use foresight_core::errors::{ForesightError, ForesightResult, StorageError};
use foresight_core::models::{CalibrationScore, Prediction, TrendSnapshot, Vote, WriteSet};
use foresight_core::traits::{IScoreSink, IVoteSource};

use crate::queries::{prediction_ops, score_ops, trend_ops, vote_ops};
use crate::{migrations, pool, to_storage_err};

pub struct SqliteStore {
    conn: Mutex<Connection>,
    db_path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open (or create) a store backed by a file on disk.
    pub fn open(path: &Path) -> ForesightResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn, Some(path.to_path_buf()))
    }

    /// Open a private in-memory store.
    pub fn open_in_memory() -> ForesightResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn, None)
    }

    fn initialize(conn: Connection, db_path: Option<PathBuf>) -> ForesightResult<Self> {
        pool::apply_pragmas(&conn)?;
        if let Some(path) = &db_path {
            if !pool::verify_wal_mode(&conn)? {
                warn!(path = %path.display(), "database did not enter WAL mode");
            }
        }
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            db_path,
        })
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Run `f` with exclusive access to the connection.
    pub fn with_conn<F, T>(&self, f: F) -> ForesightResult<T>
    where
        F: FnOnce(&Connection) -> ForesightResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| ForesightError::StorageError(StorageError::LockPoisoned))?;
        f(&guard)
    }

    pub fn schema_version(&self) -> ForesightResult<u32> {
        self.with_conn(|conn| Ok(migrations::current_version(conn)?))
    }

    pub fn insert_prediction(&self, prediction: &Prediction) -> ForesightResult<()> {
        prediction.validate()?;
        self.with_conn(|conn| prediction_ops::upsert_prediction(conn, prediction))
    }

    /// Insert votes in one transaction.
    pub fn insert_votes(&self, votes: &[Vote]) -> ForesightResult<()> {
        self.with_conn(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(format!("insert_votes begin: {e}")))?;
            for vote in votes {
                vote_ops::insert_vote(&tx, vote)?;
            }
            tx.commit()
                .map_err(|e| to_storage_err(format!("insert_votes commit: {e}")))
        })
    }

    /// Every stored score of one participant, most recent first.
    pub fn participant_scores(&self, participant_id: &str) -> ForesightResult<Vec<CalibrationScore>> {
        self.with_conn(|conn| score_ops::get_participant_scores(conn, participant_id))
    }
}

impl IVoteSource for SqliteStore {
    fn get_prediction(&self, prediction_id: &str) -> ForesightResult<Option<Prediction>> {
        self.with_conn(|conn| prediction_ops::get_prediction(conn, prediction_id))
    }

    fn get_votes(&self, prediction_id: &str) -> ForesightResult<Vec<Vote>> {
        self.with_conn(|conn| vote_ops::get_votes(conn, prediction_id))
    }

    fn list_predictions(&self) -> ForesightResult<Vec<Prediction>> {
        self.with_conn(prediction_ops::list_predictions)
    }
}

impl IScoreSink for SqliteStore {
    fn commit(&self, write_set: &WriteSet) -> ForesightResult<()> {
        if write_set.is_empty() {
            return Ok(());
        }
        self.with_conn(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(format!("commit begin: {e}")))?;

            // Dropping `tx` on the error path rolls back.
            apply_write_set(&tx, write_set)?;

            tx.commit()
                .map_err(|e| to_storage_err(format!("commit: {e}")))?;
            tracing::debug!(prediction_id = %write_set.prediction_id, "write-set committed");
            Ok(())
        })
    }

    fn get_trend(&self, prediction_id: &str) -> ForesightResult<Vec<TrendSnapshot>> {
        self.with_conn(|conn| trend_ops::get_trend(conn, prediction_id))
    }

    fn get_scores(&self, prediction_id: &str) -> ForesightResult<Vec<CalibrationScore>> {
        self.with_conn(|conn| score_ops::get_scores(conn, prediction_id))
    }
}

fn apply_write_set(conn: &Connection, write_set: &WriteSet) -> ForesightResult<()> {
    let id = write_set.prediction_id.as_str();
    if let Some(prediction) = &write_set.prediction {
        prediction_ops::upsert_prediction(conn, prediction)?;
    }
    if let Some(trend) = &write_set.trend {
        trend_ops::replace_trend(conn, id, trend)?;
    }
    if let Some(scores) = &write_set.scores {
        score_ops::replace_scores(conn, id, scores)?;
    }
    Ok(())
}
