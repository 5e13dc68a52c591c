use serde::{Deserialize, Serialize};

use super::{CalibrationScore, Prediction, TrendSnapshot};

/// Everything one prediction's run replaces, committed all-or-nothing.
///
/// `None` leaves the stored value untouched; `Some(vec![])` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteSet {
    pub prediction_id: String,
    pub prediction: Option<Prediction>,
    pub trend: Option<Vec<TrendSnapshot>>,
    pub scores: Option<Vec<CalibrationScore>>,
}

impl WriteSet {
    pub fn new(prediction_id: impl Into<String>) -> Self {
        Self {
            prediction_id: prediction_id.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prediction.is_none() && self.trend.is_none() && self.scores.is_none()
    }
}
