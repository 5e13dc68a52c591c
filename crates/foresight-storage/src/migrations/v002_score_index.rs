//! v002: per-participant lookup across predictions.

pub const MIGRATION_SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_scores_participant
    ON calibration_scores(participant_id, computed_at);
";
