//! Test fixture loader for Foresight scoring scenarios.
//!
//! Scenarios live as JSON under `test-fixtures/scenarios/` at the workspace
//! root and carry both the input history and the expected results.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use foresight_core::models::{Position, Prediction, Vote};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    // Walk up from the calling crate until the data directory appears. The
    // loader crate itself is also named test-fixtures, so look for scenarios/.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("scenarios").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/scenarios from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a scenario by file stem, e.g. `load_scenario("agree_then_disagree")`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("scenarios/{name}.json"))
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Every scenario in `scenarios/`, sorted by file name.
pub fn all_scenarios() -> Vec<Scenario> {
    list_fixtures("scenarios")
        .into_iter()
        .map(|path| {
            let content = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
        })
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub prediction: PredictionFixture,
    pub votes: Vec<VoteFixture>,
    pub expected: Expected,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionFixture {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VoteFixture {
    pub participant: String,
    pub position: Position,
    pub cast_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsensusCheck {
    pub as_of: DateTime<Utc>,
    pub probability: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Expected {
    #[serde(default)]
    pub consensus: Vec<ConsensusCheck>,
    /// A settle attempt here must be a no-op.
    pub not_settled_at: DateTime<Utc>,
    /// A settle attempt here must succeed.
    pub settled_at: DateTime<Utc>,
    pub final_probability: f64,
    pub outcome: Position,
    #[serde(default)]
    pub trend_times: Vec<DateTime<Utc>>,
    /// Final scores keyed by participant. Absent participants get no row.
    pub scores: BTreeMap<String, f64>,
}

impl Scenario {
    pub fn prediction(&self) -> Prediction {
        Prediction::new(
            self.prediction.id.clone(),
            self.prediction.created_at,
            self.prediction.end_date,
        )
    }

    /// Votes in fixture order.
    pub fn votes(&self) -> Vec<Vote> {
        self.votes
            .iter()
            .map(|v| Vote::new(self.prediction.id.clone(), v.participant.clone(), v.position, v.cast_at))
            .collect()
    }
}
