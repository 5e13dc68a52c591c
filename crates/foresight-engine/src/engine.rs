use chrono::{DateTime, Duration, Utc};
use foresight_calibration::CalibrationScorer;
use foresight_consensus::ConsensusEstimator;
use foresight_core::config::ForesightConfig;
use foresight_core::errors::{ConfigError, ForesightError, ForesightResult};
use foresight_core::models::{
    ActivitySnapshot, CalibrationScore, Prediction, Settlement, TrendSnapshot, Vote, VoteTally,
    WriteSet,
};
use foresight_core::traits::{IScoreSink, IVoteSource};
use foresight_observability::{calibration_span, settlement_span, trend_span};
use foresight_settlement::OutcomeResolver;
use foresight_trend::{build_activity, downsample, TrendBuilder};
use tracing::info;

/// Scoring operations over a store that is both the vote source and the
/// score sink. Current time is always passed in as `as_of`.
pub struct ScoringEngine<S> {
    pub(crate) store: S,
    pub(crate) config: ForesightConfig,
    pub(crate) resolver: OutcomeResolver,
    pub(crate) trend_builder: TrendBuilder,
    pub(crate) scorer: CalibrationScorer,
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<S> ScoringEngine<S>
where
    S: IVoteSource + IScoreSink,
{
    /// Build an engine with validated configuration.
    pub fn new(store: S, config: ForesightConfig) -> ForesightResult<Self> {
        config.validate()?;
        let pool = match config.batch.worker_threads {
            0 => None,
            n => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("foresight-batch-{i}"))
                    .build()
                    .map_err(|e| ConfigError::ValidationFailed {
                        field: "batch.worker_threads".to_string(),
                        message: e.to_string(),
                    })?,
            ),
        };
        Ok(Self {
            resolver: OutcomeResolver::from_config(&config.settlement),
            trend_builder: TrendBuilder::from_config(&config.trend),
            scorer: CalibrationScorer::from_config(&config.scoring),
            store,
            config,
            pool,
        })
    }

    pub fn with_defaults(store: S) -> ForesightResult<Self> {
        Self::new(store, ForesightConfig::default())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ForesightConfig {
        &self.config
    }

    /// Settle the prediction if its grace period has elapsed.
    ///
    /// Persists `{settled, final_probability, current_probability}` only when
    /// this call is the one that settles it.
    pub fn settle(&self, prediction_id: &str, as_of: DateTime<Utc>) -> ForesightResult<Settlement> {
        let _span = settlement_span!(prediction_id).entered();
        let (mut prediction, votes) = self.load(prediction_id)?;

        let settlement = self.resolver.settle(&prediction, &votes, as_of);
        if OutcomeResolver::apply(&mut prediction, &settlement) {
            let mut write_set = WriteSet::new(prediction_id);
            write_set.prediction = Some(prediction);
            self.store.commit(&write_set)?;
        }
        Ok(settlement)
    }

    /// Recompute the trend from scratch, replace the stored snapshots, and
    /// refresh `current_probability` from the closing snapshot.
    pub fn rebuild_trend(
        &self,
        prediction_id: &str,
        as_of: DateTime<Utc>,
    ) -> ForesightResult<Vec<TrendSnapshot>> {
        let (mut prediction, votes) = self.load(prediction_id)?;
        let _span = trend_span!(prediction_id, votes.len()).entered();

        let trend = self.trend_builder.build(&prediction, &votes, as_of);
        if let Some(last) = trend.last() {
            prediction.current_probability = last.consensus_probability;
        }

        let mut write_set = WriteSet::new(prediction_id);
        write_set.prediction = Some(prediction);
        write_set.trend = Some(trend.clone());
        self.store.commit(&write_set)?;

        info!(prediction_id, snapshots = trend.len(), "trend rebuilt");
        Ok(trend)
    }

    /// Recompute every participant's score and replace the stored rows.
    ///
    /// Scores against a trend rebuilt from the current votes, never the stored
    /// one: a trend stored while the prediction was open closes early and
    /// misses later votes. The rebuilt trend is committed with the scores.
    pub fn rescore_participants(
        &self,
        prediction_id: &str,
        as_of: DateTime<Utc>,
    ) -> ForesightResult<Vec<CalibrationScore>> {
        let _span = calibration_span!(prediction_id).entered();
        let (prediction, votes) = self.load(prediction_id)?;

        let trend = self.trend_builder.build(&prediction, &votes, as_of);
        let scores = self.scorer.score(&prediction, &votes, &trend, as_of)?;

        let mut write_set = WriteSet::new(prediction_id);
        write_set.trend = Some(trend);
        write_set.scores = Some(scores.clone());
        self.store.commit(&write_set)?;

        info!(prediction_id, scored = scores.len(), "participants rescored");
        Ok(scores)
    }

    /// Stored trend values reduced to at most `point_count` chart points.
    pub fn downsample(&self, prediction_id: &str, point_count: usize) -> ForesightResult<Vec<f64>> {
        self.require(prediction_id)?;
        let values: Vec<f64> = self
            .store
            .get_trend(prediction_id)?
            .iter()
            .map(|s| s.consensus_probability)
            .collect();
        Ok(downsample(&values, point_count))
    }

    /// [`downsample`](Self::downsample) with the configured point count.
    pub fn chart(&self, prediction_id: &str) -> ForesightResult<Vec<f64>> {
        self.downsample(prediction_id, self.config.chart.point_count)
    }

    /// Consensus right now, without touching the store.
    pub fn current_probability(&self, prediction_id: &str, as_of: DateTime<Utc>) -> ForesightResult<f64> {
        let (prediction, votes) = self.load(prediction_id)?;
        Ok(ConsensusEstimator::new().compute(&prediction, &votes, as_of))
    }

    /// Active-vote counts as of `as_of`.
    pub fn tally(&self, prediction_id: &str, as_of: DateTime<Utc>) -> ForesightResult<VoteTally> {
        let (_, votes) = self.load(prediction_id)?;
        Ok(foresight_consensus::tally(&votes, as_of))
    }

    /// Cumulative vote counts per `period` between `from` and `to`.
    pub fn activity(
        &self,
        prediction_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        period: Duration,
    ) -> ForesightResult<Vec<ActivitySnapshot>> {
        let (prediction, votes) = self.load(prediction_id)?;
        Ok(build_activity(&prediction, &votes, from, to, period))
    }

    /// Agree ratios over the prediction's lifetime up to `as_of`, bucketed by
    /// the configured activity period and downsampled for display.
    pub fn activity_chart(&self, prediction_id: &str, as_of: DateTime<Utc>) -> ForesightResult<Vec<f64>> {
        let (prediction, votes) = self.load(prediction_id)?;
        let to = as_of.min(prediction.end_date);
        let ratios: Vec<f64> = build_activity(
            &prediction,
            &votes,
            prediction.created_at,
            to,
            self.config.trend.activity_period(),
        )
        .iter()
        .map(|s| s.agree_ratio)
        .collect();
        Ok(downsample(&ratios, self.config.chart.point_count))
    }

    fn require(&self, prediction_id: &str) -> ForesightResult<Prediction> {
        let prediction = self
            .store
            .get_prediction(prediction_id)?
            .ok_or_else(|| ForesightError::PredictionNotFound {
                id: prediction_id.to_string(),
            })?;
        prediction.validate()?;
        Ok(prediction)
    }

    /// One consistent read of the prediction and its votes.
    pub(crate) fn load(&self, prediction_id: &str) -> ForesightResult<(Prediction, Vec<Vote>)> {
        let prediction = self.require(prediction_id)?;
        let votes = self.store.get_votes(prediction_id)?;
        Ok((prediction, votes))
    }
}
