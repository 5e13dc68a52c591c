// Fixed values of the scoring model. Tunables live in `config::defaults`.

/// Probability reported when there is nothing to weigh.
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

/// Final probabilities at or above this resolve to `Agree`.
pub const OUTCOME_THRESHOLD: f64 = 0.5;

pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;
