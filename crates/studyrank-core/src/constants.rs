//! Default coefficients for the weighting formula.

/// Default weight on the question-density signal.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Default weight on the time-share signal.
pub const DEFAULT_BETA: f64 = 0.3;

/// Default weight on the difficulty signal.
pub const DEFAULT_GAMMA: f64 = 0.2;

/// Default exponential decay rate applied per unit of prerequisite depth.
/// Useful range is roughly 0.08–0.18; higher values penalize deep chains
/// more strongly.
pub const DEFAULT_LAMBDA_DEPTH: f64 = 0.12;

/// Default guard against division by zero in the density term.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Decimal places kept when emitting weights and importance scores.
/// Cosmetic output stability only.
pub const OUTPUT_DECIMALS: i32 = 6;
