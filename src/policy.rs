use ndarray::ArrayView1;
use rand::Rng;

use crate::error::{LanderError, Result};

/// Epsilon-greedy action selection.
///
/// With probability `epsilon` a uniformly random action from the full
/// discrete action set is returned; otherwise the greedy action. Stateless:
/// the caller owns the random source, so runs can be seeded for tests.
pub fn select<R: Rng>(values: ArrayView1<f32>, epsilon: f32, rng: &mut R) -> Result<usize> {
    if values.is_empty() {
        return Err(LanderError::NumericalError(
            "empty value vector".to_string(),
        ));
    }

    if rng.gen::<f32>() < epsilon {
        Ok(rng.gen_range(0..values.len()))
    } else {
        greedy(values)
    }
}

/// Index of the maximum entry, ties broken by the first occurrence.
pub fn greedy(values: ArrayView1<f32>) -> Result<usize> {
    if values.is_empty() {
        return Err(LanderError::NumericalError(
            "empty value vector".to_string(),
        ));
    }

    let mut best = 0;
    let mut best_value = values[0];
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > best_value {
            best = i;
            best_value = v;
        }
    }
    Ok(best)
}
