use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::OUTCOME_THRESHOLD;

/// A participant's stance on a prediction, and the resolved outcome label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Agree,
    Disagree,
}

impl Position {
    /// 1.0 for `Agree`, 0.0 for `Disagree`.
    pub fn indicator(self) -> f64 {
        match self {
            Position::Agree => 1.0,
            Position::Disagree => 0.0,
        }
    }

    /// Outcome label for a final probability: `Agree` iff `p >= 0.5`.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= OUTCOME_THRESHOLD {
            Position::Agree
        } else {
            Position::Disagree
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Position::Agree => Position::Disagree,
            Position::Disagree => Position::Agree,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Agree => "agree",
            Position::Disagree => "disagree",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agree" => Ok(Position::Agree),
            "disagree" => Ok(Position::Disagree),
            other => Err(format!("unknown position: {other}")),
        }
    }
}
