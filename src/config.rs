use serde::{Deserialize, Serialize};

use crate::error::{LanderError, Result};

/// Hyperparameters for a training run.
///
/// Observation and action dimensionality are explicit configuration checked
/// at startup rather than introspected from the environment at runtime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Length of the observation vector the environment produces.
    pub observation_dim: usize,
    /// Size of the discrete action set.
    pub action_count: usize,
    /// Discount factor applied to future reward in the Bellman target.
    pub gamma: f32,
    /// Initial exploration probability.
    pub epsilon: f32,
    /// Multiplicative per-episode epsilon decay.
    pub epsilon_decay: f32,
    /// Floor on the exploration probability.
    pub epsilon_min: f32,
    /// Total number of episodes to run.
    pub episodes: usize,
    /// Learning rate for the value network.
    pub learning_rate: f32,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            observation_dim: 8,
            action_count: 4,
            gamma: 0.9,
            epsilon: 1.0,
            epsilon_decay: 0.995,
            epsilon_min: 0.1,
            episodes: 1000,
            learning_rate: 0.001,
        }
    }
}

impl TrainerConfig {
    /// Validate the configuration before a run starts.
    pub fn validate(&self) -> Result<()> {
        if self.observation_dim == 0 {
            return Err(LanderError::invalid_parameter(
                "observation_dim",
                "must be non-zero",
            ));
        }
        if self.action_count == 0 {
            return Err(LanderError::invalid_parameter(
                "action_count",
                "must be non-zero",
            ));
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(LanderError::invalid_parameter(
                "gamma",
                "must be in [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(LanderError::invalid_parameter(
                "epsilon",
                "must be in [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.epsilon_decay) {
            return Err(LanderError::invalid_parameter(
                "epsilon_decay",
                "must be in [0, 1]",
            ));
        }
        if self.epsilon_min < 0.0 || self.epsilon_min > self.epsilon {
            return Err(LanderError::invalid_parameter(
                "epsilon_min",
                "must be in [0, epsilon]",
            ));
        }
        if self.learning_rate <= 0.0 || !self.learning_rate.is_finite() {
            return Err(LanderError::invalid_parameter(
                "learning_rate",
                "must be positive and finite",
            ));
        }
        Ok(())
    }
}
