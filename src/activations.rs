use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Activation functions available to the value network.
///
/// Hidden layers use ReLU; the output layer is linear so Q-values are
/// unbounded in both directions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default)]
pub enum Activation {
    #[default]
    Relu,
    Linear,
}

impl Activation {
    /// Apply the activation function to an input array in-place.
    pub fn apply(&self, input: &mut Array1<f32>) {
        match self {
            Activation::Relu => {
                input.mapv_inplace(|v| v.max(0.0));
            }
            Activation::Linear => {}
        }
    }

    /// Compute the derivative of the activation function for an input array.
    /// The derivative is evaluated at the pre-activation values.
    pub fn derivative(&self, input: &Array1<f32>) -> Array1<f32> {
        match self {
            Activation::Relu => input.mapv(|v| if v > 0.0 { 1.0 } else { 0.0 }),
            Activation::Linear => Array1::ones(input.len()),
        }
    }
}
