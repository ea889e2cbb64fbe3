use ndarray::{Array1, Array2, ArrayView1, Axis};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

use crate::activations::Activation;
use crate::error::{LanderError, Result};
use crate::optimizer::{Optimizer, OptimizerWrapper};

/// Width of each hidden layer in the default lander network.
pub const HIDDEN_WIDTH: usize = 30;

/// Number of hidden layers in the default lander network.
pub const HIDDEN_LAYERS: usize = 3;

/// A fully connected layer: weights, biases, and an activation function.
///
/// The forward pass caches its input and pre-activation output so that a
/// subsequent backward pass can compute gradients.
#[derive(Serialize, Deserialize, Clone)]
pub struct DenseLayer {
    pub weights: Array2<f32>,
    pub biases: Array1<f32>,
    pub activation: Activation,
    #[serde(skip)]
    pre_activation: Option<Array1<f32>>,
    #[serde(skip)]
    input: Option<Array1<f32>>,
}

impl DenseLayer {
    /// Create a new layer with the given input size, output size, and activation
    /// function. The weights are initialized with random values from a uniform
    /// distribution between -0.1 and 0.1. The biases are initialized with zeros.
    pub fn new(input_size: usize, output_size: usize, activation: Activation) -> Self {
        let weights = Array2::random((input_size, output_size), Uniform::new(-0.1, 0.1));
        let biases = Array1::zeros(output_size);
        DenseLayer {
            weights,
            biases,
            activation,
            pre_activation: None,
            input: None,
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.shape()[0]
    }

    pub fn output_size(&self) -> usize {
        self.weights.shape()[1]
    }

    /// Forward pass for a single input vector, caching what backward() needs.
    fn forward(&mut self, input: ArrayView1<f32>) -> Array1<f32> {
        self.input = Some(input.to_owned());
        let mut output = input.dot(&self.weights) + &self.biases;
        self.pre_activation = Some(output.clone());
        self.activation.apply(&mut output);
        output
    }

    /// Backward pass for a single output-error vector.
    ///
    /// Returns the error propagated to the previous layer together with the
    /// weight and bias gradients.
    fn backward(&self, output_error: ArrayView1<f32>) -> (Array1<f32>, Array2<f32>, Array1<f32>) {
        let pre_activation = self
            .pre_activation
            .as_ref()
            .expect("forward() must be called before backward()");
        let input = self
            .input
            .as_ref()
            .expect("forward() must be called before backward()");

        let activation_deriv = self.activation.derivative(pre_activation);
        let adjusted_error = &output_error.to_owned() * &activation_deriv;
        let weight_gradients = input
            .view()
            .insert_axis(Axis(1))
            .dot(&adjusted_error.view().insert_axis(Axis(0)));
        let bias_gradients = adjusted_error.clone();
        let propagated_error = self.weights.dot(&adjusted_error);

        (propagated_error, weight_gradients, bias_gradients)
    }
}

/// The action-value function approximator: a dense network mapping an
/// observation vector to one Q-value per action.
#[derive(Serialize, Deserialize)]
pub struct QNetwork {
    pub layers: Vec<DenseLayer>,
    pub optimizer: OptimizerWrapper,
}

impl QNetwork {
    /// Create a network from explicit layer sizes and activations.
    /// `layer_sizes` runs from the observation dimension to the action count.
    pub fn new(
        layer_sizes: &[usize],
        activations: &[Activation],
        optimizer: OptimizerWrapper,
    ) -> Result<Self> {
        if layer_sizes.len() < 2 {
            return Err(LanderError::invalid_parameter(
                "layer_sizes",
                "must have at least input and output sizes",
            ));
        }
        if activations.len() != layer_sizes.len() - 1 {
            return Err(LanderError::invalid_parameter(
                "activations",
                "must have one activation per layer",
            ));
        }
        if layer_sizes.iter().any(|&s| s == 0) {
            return Err(LanderError::invalid_parameter(
                "layer_sizes",
                "layer sizes must be non-zero",
            ));
        }

        let layers = layer_sizes
            .windows(2)
            .zip(activations.iter())
            .map(|(window, &activation)| DenseLayer::new(window[0], window[1], activation))
            .collect::<Vec<_>>();

        Ok(QNetwork { layers, optimizer })
    }

    /// The lander architecture: three ReLU hidden layers of fixed width and a
    /// linear output layer.
    pub fn lander_default(
        observation_dim: usize,
        action_count: usize,
        optimizer: OptimizerWrapper,
    ) -> Result<Self> {
        let mut layer_sizes = vec![observation_dim];
        layer_sizes.extend(std::iter::repeat(HIDDEN_WIDTH).take(HIDDEN_LAYERS));
        layer_sizes.push(action_count);

        let mut activations = vec![Activation::Relu; HIDDEN_LAYERS];
        activations.push(Activation::Linear);

        Self::new(&layer_sizes, &activations, optimizer)
    }

    /// Observation dimension the network accepts.
    pub fn input_dim(&self) -> usize {
        self.layers.first().map(|l| l.input_size()).unwrap_or(0)
    }

    /// Number of actions the network scores.
    pub fn output_dim(&self) -> usize {
        self.layers.last().map(|l| l.output_size()).unwrap_or(0)
    }

    fn check_observation(&self, observation: &ArrayView1<f32>) -> Result<()> {
        if observation.len() != self.input_dim() {
            return Err(LanderError::dimension_mismatch(
                format!("observation of length {}", self.input_dim()),
                format!("length {}", observation.len()),
            ));
        }
        Ok(())
    }

    /// Compute the value vector for an observation.
    /// Deterministic given the current parameters; fails if the observation
    /// does not match the configured input dimension.
    pub fn evaluate(&mut self, observation: ArrayView1<f32>) -> Result<Array1<f32>> {
        self.check_observation(&observation)?;
        let mut output = observation.to_owned();
        for layer in &mut self.layers {
            output = layer.forward(output.view());
        }
        Ok(output)
    }

    /// One gradient step minimizing squared error between the current
    /// prediction for `observation` and `target`. When the target differs
    /// from the prediction only at the taken action's entry, only that output
    /// dimension receives a non-zero error signal.
    pub fn fit(
        &mut self,
        observation: ArrayView1<f32>,
        target: ArrayView1<f32>,
        learning_rate: f32,
    ) -> Result<()> {
        if target.len() != self.output_dim() {
            return Err(LanderError::dimension_mismatch(
                format!("target of length {}", self.output_dim()),
                format!("length {}", target.len()),
            ));
        }

        let output = self.evaluate(observation)?;
        let output_error = &output - &target;

        // Backpropagate, collecting per-layer gradients.
        let mut gradients = Vec::with_capacity(self.layers.len());
        let mut current_error = output_error;
        for layer in self.layers.iter().rev() {
            let (propagated, weight_gradients, bias_gradients) =
                layer.backward(current_error.view());
            gradients.push((weight_gradients, bias_gradients));
            current_error = propagated;
        }
        gradients.reverse();

        // Apply updates in layer order; stateful optimizers rely on it.
        let QNetwork { layers, optimizer } = self;
        for (i, (layer, (weight_gradients, bias_gradients))) in
            layers.iter_mut().zip(gradients).enumerate()
        {
            optimizer.update_weights(i, &mut layer.weights, &weight_gradients, learning_rate);
            optimizer.update_biases(i, &mut layer.biases, &bias_gradients, learning_rate);
        }

        Ok(())
    }

    /// Serialize the network (parameters and optimizer state) to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let serialized = bincode::serialize(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(&serialized)?;
        Ok(())
    }

    /// Load a network previously written by [`QNetwork::save`].
    /// A missing or malformed file is a hard error; there is no fallback to
    /// fresh initialization.
    pub fn load(path: &str) -> Result<Self> {
        let mut file = fs::File::open(path)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        let deserialized: Self = bincode::deserialize(&buffer)?;
        Ok(deserialized)
    }
}
