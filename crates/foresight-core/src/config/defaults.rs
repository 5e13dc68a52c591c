// Single source of truth for all default values.

// --- Settlement ---
pub const DEFAULT_GRACE_HOURS: u64 = 72;

// --- Trend ---
pub const DEFAULT_MIN_SPACING_MINUTES: u64 = 60;
pub const DEFAULT_ACTIVITY_PERIOD_HOURS: u64 = 24;

// --- Scoring ---
pub const DEFAULT_COUNT_EXCLUDED_IN_POPULATION: bool = true;

// --- Chart ---
pub const DEFAULT_CHART_POINT_COUNT: usize = 50;

// --- Batch ---
pub const DEFAULT_WORKER_THREADS: usize = 0; // 0 = rayon default
pub const DEFAULT_BATCH_PAGE_SIZE: usize = 100;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "foresight.toml";
