//! In-memory store. A single lock guards all tables so a write-set is applied
//! atomically with respect to readers.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use foresight_core::errors::{ForesightError, ForesightResult, StorageError};
use foresight_core::models::{CalibrationScore, Prediction, TrendSnapshot, Vote, WriteSet};
use foresight_core::traits::{IScoreSink, IVoteSource};

#[derive(Debug, Default)]
struct Tables {
    predictions: BTreeMap<String, Prediction>,
    votes: HashMap<String, Vec<Vote>>,
    trends: HashMap<String, Vec<TrendSnapshot>>,
    scores: HashMap<String, Vec<CalibrationScore>>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ForesightResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| ForesightError::StorageError(StorageError::LockPoisoned))
    }

    fn write(&self) -> ForesightResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| ForesightError::StorageError(StorageError::LockPoisoned))
    }

    pub fn insert_prediction(&self, prediction: &Prediction) -> ForesightResult<()> {
        prediction.validate()?;
        self.write()?
            .predictions
            .insert(prediction.id.clone(), prediction.clone());
        Ok(())
    }

    /// Append votes, keeping each prediction's list ordered by `cast_at`.
    pub fn insert_votes(&self, votes: &[Vote]) -> ForesightResult<()> {
        let mut tables = self.write()?;
        for vote in votes {
            if !tables.predictions.contains_key(&vote.prediction_id) {
                return Err(ForesightError::PredictionNotFound {
                    id: vote.prediction_id.clone(),
                });
            }
        }
        for vote in votes {
            let list = tables.votes.entry(vote.prediction_id.clone()).or_default();
            let at = list.partition_point(|v| v.cast_at <= vote.cast_at);
            list.insert(at, vote.clone());
        }
        Ok(())
    }
}

impl IVoteSource for MemoryStore {
    fn get_prediction(&self, prediction_id: &str) -> ForesightResult<Option<Prediction>> {
        Ok(self.read()?.predictions.get(prediction_id).cloned())
    }

    fn get_votes(&self, prediction_id: &str) -> ForesightResult<Vec<Vote>> {
        Ok(self.read()?.votes.get(prediction_id).cloned().unwrap_or_default())
    }

    fn list_predictions(&self) -> ForesightResult<Vec<Prediction>> {
        let mut all: Vec<Prediction> = self.read()?.predictions.values().cloned().collect();
        all.sort_by(|a, b| a.end_date.cmp(&b.end_date).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }
}

impl IScoreSink for MemoryStore {
    fn commit(&self, write_set: &WriteSet) -> ForesightResult<()> {
        if write_set.is_empty() {
            return Ok(());
        }
        let mut tables = self.write()?;
        let id = &write_set.prediction_id;
        if write_set.prediction.is_none() && !tables.predictions.contains_key(id) {
            return Err(ForesightError::PredictionNotFound { id: id.clone() });
        }
        if let Some(prediction) = &write_set.prediction {
            tables.predictions.insert(id.clone(), prediction.clone());
        }
        if let Some(trend) = &write_set.trend {
            tables.trends.insert(id.clone(), trend.clone());
        }
        if let Some(scores) = &write_set.scores {
            let mut scores = scores.clone();
            scores.sort_by(|a, b| a.participant_id.cmp(&b.participant_id));
            tables.scores.insert(id.clone(), scores);
        }
        Ok(())
    }

    fn get_trend(&self, prediction_id: &str) -> ForesightResult<Vec<TrendSnapshot>> {
        Ok(self.read()?.trends.get(prediction_id).cloned().unwrap_or_default())
    }

    fn get_scores(&self, prediction_id: &str) -> ForesightResult<Vec<CalibrationScore>> {
        Ok(self.read()?.scores.get(prediction_id).cloned().unwrap_or_default())
    }
}
