//! Batch runner: settle, rebuild, and rescore every due prediction.

use chrono::{DateTime, Utc};
use foresight_core::errors::{ForesightError, ForesightErrorCode, ForesightResult};
use foresight_core::models::{Prediction, WriteSet};
use foresight_core::traits::{IScoreSink, IVoteSource};
use foresight_observability::batch_span;
use foresight_settlement::{settleable, OutcomeResolver};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::{CancellationToken, ScoringEngine};

/// One prediction that failed during a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchFailure {
    pub prediction_id: String,
    pub code: &'static str,
    pub message: String,
}

/// Summary of one batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub run_id: String,
    pub as_of: DateTime<Utc>,
    /// Unsettled predictions past their grace period when the run started.
    pub candidates: usize,
    /// Committed predictions, in candidate order.
    pub settled: Vec<String>,
    pub failures: Vec<BatchFailure>,
    /// Candidates never attempted because the run was cancelled.
    pub skipped: usize,
    pub cancelled: bool,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && !self.cancelled
    }
}

enum Outcome {
    Committed,
    Failed(ForesightError),
    Skipped,
}

impl<S> ScoringEngine<S>
where
    S: IVoteSource + IScoreSink,
{
    /// Settle, rebuild, and rescore every prediction due at `as_of`.
    ///
    /// Each prediction's results go out in one write-set. A failing
    /// prediction is recorded and the rest continue. Cancellation is checked
    /// before each prediction starts; work already started is finished.
    pub fn run_batch(
        &self,
        as_of: DateTime<Utc>,
        token: &CancellationToken,
    ) -> ForesightResult<BatchReport> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let predictions = self.store.list_predictions()?;
        let due = settleable(&self.resolver, &predictions, as_of);
        let _span = batch_span!(due.len()).entered();

        let mut report = BatchReport {
            run_id,
            as_of,
            candidates: due.len(),
            settled: Vec::new(),
            failures: Vec::new(),
            skipped: 0,
            cancelled: false,
        };

        for page in due.chunks(self.config.batch.page_size) {
            if token.is_cancelled() {
                report.skipped += page.len();
                continue;
            }
            let outcomes = self.run_page(page, as_of, token);
            for (prediction, outcome) in page.iter().zip(outcomes) {
                match outcome {
                    Outcome::Committed => report.settled.push(prediction.id.clone()),
                    Outcome::Failed(e) => {
                        warn!(prediction_id = %prediction.id, error = %e, "batch prediction failed");
                        report.failures.push(BatchFailure {
                            prediction_id: prediction.id.clone(),
                            code: e.error_code(),
                            message: e.to_string(),
                        });
                    }
                    Outcome::Skipped => report.skipped += 1,
                }
            }
        }
        report.cancelled = token.is_cancelled();

        info!(
            run_id = %report.run_id,
            candidates = report.candidates,
            settled = report.settled.len(),
            failed = report.failures.len(),
            skipped = report.skipped,
            cancelled = report.cancelled,
            "batch finished"
        );
        Ok(report)
    }

    fn run_page(
        &self,
        page: &[&Prediction],
        as_of: DateTime<Utc>,
        token: &CancellationToken,
    ) -> Vec<Outcome> {
        let work = || -> Vec<Outcome> {
            page.par_iter()
                .map(|prediction| {
                    if token.is_cancelled() {
                        return Outcome::Skipped;
                    }
                    match self.process(&prediction.id, as_of) {
                        Ok(()) => Outcome::Committed,
                        Err(e) => Outcome::Failed(e),
                    }
                })
                .collect()
        };
        match &self.pool {
            Some(pool) => pool.install(work),
            None => work(),
        }
    }

    /// Settle, rebuild, and rescore one prediction from a fresh read, then
    /// commit everything together.
    fn process(&self, prediction_id: &str, as_of: DateTime<Utc>) -> ForesightResult<()> {
        let (mut prediction, votes) = self.load(prediction_id)?;

        let settlement = self.resolver.settle(&prediction, &votes, as_of);
        if !OutcomeResolver::apply(&mut prediction, &settlement) {
            return Err(ForesightError::InvalidPrediction {
                id: prediction_id.to_string(),
                reason: format!("not settleable at {as_of}: {settlement:?}"),
            });
        }

        let trend = self.trend_builder.build(&prediction, &votes, as_of);
        let scores = self.scorer.score(&prediction, &votes, &trend, as_of)?;

        let mut write_set = WriteSet::new(prediction_id);
        write_set.prediction = Some(prediction);
        write_set.trend = Some(trend);
        write_set.scores = Some(scores);
        self.store.commit(&write_set)
    }
}
