use studyrank_core::config::WeightConfig;
use studyrank_core::constants;
use studyrank_core::errors::WeightError;

#[test]
fn defaults_match_constants() {
    let config = WeightConfig::default();
    assert_eq!(config.alpha, constants::DEFAULT_ALPHA);
    assert_eq!(config.beta, constants::DEFAULT_BETA);
    assert_eq!(config.gamma, constants::DEFAULT_GAMMA);
    assert_eq!(config.lambda_depth, constants::DEFAULT_LAMBDA_DEPTH);
    assert_eq!(config.epsilon, constants::DEFAULT_EPSILON);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_toml_fills_missing_fields_from_defaults() {
    let config = WeightConfig::from_toml_str("alpha = 0.9\nlambda_depth = 0.18\n").unwrap();
    assert_eq!(config.alpha, 0.9);
    assert_eq!(config.lambda_depth, 0.18);
    assert_eq!(config.beta, constants::DEFAULT_BETA);
    assert_eq!(config.gamma, constants::DEFAULT_GAMMA);
    assert_eq!(config.epsilon, constants::DEFAULT_EPSILON);
}

#[test]
fn rejects_non_positive_epsilon() {
    let config = WeightConfig {
        epsilon: 0.0,
        ..WeightConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(WeightError::InvalidConfig { .. })
    ));
}

#[test]
fn rejects_negative_lambda_depth() {
    let config = WeightConfig {
        lambda_depth: -0.1,
        ..WeightConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(WeightError::InvalidConfig { .. })
    ));
}

#[test]
fn rejects_non_finite_coefficients() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let config = WeightConfig {
            alpha: bad,
            ..WeightConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WeightError::InvalidConfig { .. })
        ));
    }
}

#[test]
fn rejects_malformed_toml() {
    assert!(matches!(
        WeightConfig::from_toml_str("alpha = \"half\""),
        Err(WeightError::InvalidConfig { .. })
    ));
}

#[test]
fn zero_lambda_depth_is_allowed() {
    // Decay disabled entirely is a legitimate tuning.
    let config = WeightConfig {
        lambda_depth: 0.0,
        ..WeightConfig::default()
    };
    assert!(config.validate().is_ok());
}
