use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{WeightError, WeightResult};

/// Tunable coefficients for the subtopic weighting formula.
///
/// Supplied explicitly to the engine at construction time; never read from
/// the study-plan document itself. Missing fields in a serialized config
/// fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    /// Weight on the question-density signal.
    pub alpha: f64,
    /// Weight on the time-share signal.
    pub beta: f64,
    /// Weight on the difficulty signal.
    pub gamma: f64,
    /// Exponential decay rate applied per unit of prerequisite depth.
    pub lambda_depth: f64,
    /// Small positive constant preventing division by zero in the density
    /// term.
    pub epsilon: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            alpha: constants::DEFAULT_ALPHA,
            beta: constants::DEFAULT_BETA,
            gamma: constants::DEFAULT_GAMMA,
            lambda_depth: constants::DEFAULT_LAMBDA_DEPTH,
            epsilon: constants::DEFAULT_EPSILON,
        }
    }
}

impl WeightConfig {
    /// Parse a config from TOML, filling missing fields from defaults.
    pub fn from_toml_str(raw: &str) -> WeightResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| WeightError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject coefficient sets the formula cannot evaluate safely.
    pub fn validate(&self) -> WeightResult<()> {
        let named = [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
            ("lambda_depth", self.lambda_depth),
            ("epsilon", self.epsilon),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(WeightError::InvalidConfig {
                    reason: format!("{name} must be finite, got {value}"),
                });
            }
        }
        if self.lambda_depth < 0.0 {
            return Err(WeightError::InvalidConfig {
                reason: format!(
                    "lambda_depth must be non-negative, got {}",
                    self.lambda_depth
                ),
            });
        }
        if self.epsilon <= 0.0 {
            return Err(WeightError::InvalidConfig {
                reason: format!("epsilon must be positive, got {}", self.epsilon),
            });
        }
        Ok(())
    }
}
