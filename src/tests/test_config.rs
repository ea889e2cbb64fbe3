use crate::config::TrainerConfig;

#[test]
fn test_default_matches_lander_run() {
    let config = TrainerConfig::default();
    assert_eq!(config.observation_dim, 8);
    assert_eq!(config.action_count, 4);
    assert_eq!(config.gamma, 0.9);
    assert_eq!(config.epsilon, 1.0);
    assert_eq!(config.epsilon_decay, 0.995);
    assert_eq!(config.epsilon_min, 0.1);
    assert_eq!(config.episodes, 1000);
    assert_eq!(config.learning_rate, 0.001);
    config.validate().unwrap();
}

#[test]
fn test_validate_rejects_bad_gamma() {
    let config = TrainerConfig {
        gamma: 1.5,
        ..TrainerConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_dimensions() {
    let config = TrainerConfig {
        observation_dim: 0,
        ..TrainerConfig::default()
    };
    assert!(config.validate().is_err());

    let config = TrainerConfig {
        action_count: 0,
        ..TrainerConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_epsilon_floor_above_epsilon() {
    let config = TrainerConfig {
        epsilon: 0.05,
        epsilon_min: 0.1,
        ..TrainerConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_nonpositive_learning_rate() {
    let config = TrainerConfig {
        learning_rate: 0.0,
        ..TrainerConfig::default()
    };
    assert!(config.validate().is_err());
}
