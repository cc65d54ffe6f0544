//! Pure scoring math for subtopic weights.
//!
//! ```text
//! density    = pyqs / (hours + epsilon)
//! time_share = hours / total_hours
//! difficulty = ln(1 + hours)
//! raw        = alpha*density + beta*time_share + gamma*difficulty
//! adjusted   = raw * exp(-lambda_depth * depth)
//! ```
//!
//! `adjusted` is what gets normalized per subject; depth 0 is undecayed.

use studyrank_core::config::WeightConfig;
use studyrank_core::constants::OUTPUT_DECIMALS;
use studyrank_core::plan::ScoreBreakdown;

/// Composite score for one subtopic, decayed by its prerequisite depth.
///
/// Negative inputs clamp to 0. A `total_hours` of 0 contributes a time
/// share of 0; callers take the uniform fallback before that matters.
pub fn compute(
    hours: f64,
    pyqs: f64,
    depth: u32,
    total_hours: f64,
    config: &WeightConfig,
) -> ScoreBreakdown {
    let h = hours.max(0.0);
    let p = pyqs.max(0.0);

    let density = p / (h + config.epsilon);
    let time_share = if total_hours > 0.0 { h / total_hours } else { 0.0 };
    let difficulty = (1.0 + h).ln();

    let raw = config.alpha * density + config.beta * time_share + config.gamma * difficulty;
    let adjusted = raw * (-config.lambda_depth * f64::from(depth)).exp();

    ScoreBreakdown {
        raw,
        adjusted,
        depth,
    }
}

/// Round to the fixed output precision.
///
/// Cosmetic only: the per-subject sum-to-1 invariant holds within
/// floating-point tolerance, not exactly, and must not be rebuilt on top of
/// the rounded values.
pub fn round_output(value: f64) -> f64 {
    let scale = 10f64.powi(OUTPUT_DECIMALS);
    (value * scale).round() / scale
}
