//! v001: predictions, votes, trend_snapshots, calibration_scores.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS predictions (
    id                  TEXT PRIMARY KEY,
    created_at          TEXT NOT NULL,
    end_date            TEXT NOT NULL,
    settled             INTEGER NOT NULL DEFAULT 0,
    final_probability   REAL NOT NULL DEFAULT 0.5,
    current_probability REAL NOT NULL DEFAULT 0.5
);

CREATE INDEX IF NOT EXISTS idx_predictions_open
    ON predictions(settled, end_date);

CREATE TABLE IF NOT EXISTS votes (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    prediction_id   TEXT NOT NULL REFERENCES predictions(id) ON DELETE CASCADE,
    participant_id  TEXT NOT NULL,
    position        TEXT NOT NULL CHECK (position IN ('agree', 'disagree')),
    cast_at         TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_votes_prediction_time
    ON votes(prediction_id, cast_at);

CREATE TABLE IF NOT EXISTS trend_snapshots (
    prediction_id         TEXT NOT NULL REFERENCES predictions(id) ON DELETE CASCADE,
    sequence              INTEGER NOT NULL,
    taken_at              TEXT NOT NULL,
    consensus_probability REAL NOT NULL,
    PRIMARY KEY (prediction_id, sequence)
);

CREATE TABLE IF NOT EXISTS calibration_scores (
    prediction_id   TEXT NOT NULL REFERENCES predictions(id) ON DELETE CASCADE,
    participant_id  TEXT NOT NULL,
    score           REAL NOT NULL,
    computed_at     TEXT NOT NULL,
    PRIMARY KEY (prediction_id, participant_id)
);
";
