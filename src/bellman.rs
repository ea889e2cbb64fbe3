//! One-step Bellman backup for the action actually taken.

use ndarray::{Array1, ArrayView1};

use crate::error::{LanderError, Result};

/// Scalar training target for the taken action.
///
/// At a terminal transition the target is the reward alone; otherwise it is
/// `reward + gamma * max(next_values)`, the one-step Bellman backup.
pub fn target(reward: f32, next_values: ArrayView1<f32>, gamma: f32, done: bool) -> f32 {
    if done {
        return reward;
    }
    let max_next = next_values
        .iter()
        .fold(f32::NEG_INFINITY, |max, &v| max.max(v));
    reward + gamma * max_next
}

/// Full target vector for a network update: the current value vector with
/// only the taken action's entry replaced by `target`. Every other entry
/// equals the current prediction, so the update leaves those outputs with a
/// zero error signal.
pub fn target_vector(values: &Array1<f32>, action: usize, target: f32) -> Result<Array1<f32>> {
    if action >= values.len() {
        return Err(LanderError::InvalidAction {
            action,
            num_actions: values.len(),
        });
    }
    let mut targets = values.clone();
    targets[action] = target;
    Ok(targets)
}
