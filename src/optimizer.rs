use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// A gradient-step rule applied to one layer's parameters at a time.
///
/// `layer` is the index of the layer being updated; stateful optimizers use
/// it to address their per-layer moment estimates.
pub trait Optimizer {
    fn update_weights(
        &mut self,
        layer: usize,
        weights: &mut Array2<f32>,
        gradients: &Array2<f32>,
        learning_rate: f32,
    );
    fn update_biases(
        &mut self,
        layer: usize,
        biases: &mut Array1<f32>,
        gradients: &Array1<f32>,
        learning_rate: f32,
    );
}

#[derive(Serialize, Deserialize, Clone)]
pub enum OptimizerWrapper {
    SGD(SGD),
    Adam(Adam),
}

impl Optimizer for OptimizerWrapper {
    fn update_weights(
        &mut self,
        layer: usize,
        weights: &mut Array2<f32>,
        gradients: &Array2<f32>,
        learning_rate: f32,
    ) {
        match self {
            OptimizerWrapper::SGD(optimizer) => {
                optimizer.update_weights(layer, weights, gradients, learning_rate)
            }
            OptimizerWrapper::Adam(optimizer) => {
                optimizer.update_weights(layer, weights, gradients, learning_rate)
            }
        }
    }

    fn update_biases(
        &mut self,
        layer: usize,
        biases: &mut Array1<f32>,
        gradients: &Array1<f32>,
        learning_rate: f32,
    ) {
        match self {
            OptimizerWrapper::SGD(optimizer) => {
                optimizer.update_biases(layer, biases, gradients, learning_rate)
            }
            OptimizerWrapper::Adam(optimizer) => {
                optimizer.update_biases(layer, biases, gradients, learning_rate)
            }
        }
    }
}

/// Plain stochastic gradient descent, no internal state.
#[derive(Serialize, Deserialize, Clone)]
pub struct SGD;

impl SGD {
    pub fn new() -> SGD {
        SGD
    }
}

impl Default for SGD {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer for SGD {
    fn update_weights(
        &mut self,
        _layer: usize,
        weights: &mut Array2<f32>,
        gradients: &Array2<f32>,
        learning_rate: f32,
    ) {
        weights.zip_mut_with(gradients, |w, &g| *w -= learning_rate * g);
    }

    fn update_biases(
        &mut self,
        _layer: usize,
        biases: &mut Array1<f32>,
        gradients: &Array1<f32>,
        learning_rate: f32,
    ) {
        biases.zip_mut_with(gradients, |b, &g| *b -= learning_rate * g);
    }
}

/// Adam optimizer with bias-corrected first and second moment estimates.
///
/// Moment state is kept per layer, addressed by layer index, and allocated
/// lazily on the first update so the optimizer can be constructed before the
/// network.
#[derive(Serialize, Deserialize, Clone)]
pub struct Adam {
    pub beta1: f32,
    pub beta2: f32,
    pub epsilon: f32,
    m_weights: Vec<Array2<f32>>,
    v_weights: Vec<Array2<f32>>,
    m_biases: Vec<Array1<f32>>,
    v_biases: Vec<Array1<f32>>,
    t: usize,
}

impl Adam {
    pub fn new(beta1: f32, beta2: f32, epsilon: f32) -> Self {
        Adam {
            beta1,
            beta2,
            epsilon,
            m_weights: Vec::new(),
            v_weights: Vec::new(),
            m_biases: Vec::new(),
            v_biases: Vec::new(),
            t: 0,
        }
    }
}

impl Default for Adam {
    fn default() -> Self {
        Self::new(0.9, 0.999, 1e-8)
    }
}

impl Optimizer for Adam {
    fn update_weights(
        &mut self,
        layer: usize,
        weights: &mut Array2<f32>,
        gradients: &Array2<f32>,
        learning_rate: f32,
    ) {
        // The network applies updates in layer order, so layer 0 marks the
        // start of a new timestep.
        if layer == 0 {
            self.t += 1;
        }
        while self.m_weights.len() <= layer {
            self.m_weights.push(Array2::zeros(gradients.dim()));
            self.v_weights.push(Array2::zeros(gradients.dim()));
        }

        let m = &mut self.m_weights[layer];
        let v = &mut self.v_weights[layer];

        *m = &*m * self.beta1 + gradients * (1.0 - self.beta1);
        *v = &*v * self.beta2 + &(gradients * gradients) * (1.0 - self.beta2);

        let m_hat = m.mapv(|x| x / (1.0 - self.beta1.powi(self.t as i32)));
        let v_hat = v.mapv(|x| x / (1.0 - self.beta2.powi(self.t as i32)));

        *weights -= &((&m_hat / (v_hat.mapv(f32::sqrt) + self.epsilon)) * learning_rate);
    }

    fn update_biases(
        &mut self,
        layer: usize,
        biases: &mut Array1<f32>,
        gradients: &Array1<f32>,
        learning_rate: f32,
    ) {
        while self.m_biases.len() <= layer {
            self.m_biases.push(Array1::zeros(gradients.dim()));
            self.v_biases.push(Array1::zeros(gradients.dim()));
        }

        let m = &mut self.m_biases[layer];
        let v = &mut self.v_biases[layer];

        *m = &*m * self.beta1 + gradients * (1.0 - self.beta1);
        *v = &*v * self.beta2 + &(gradients * gradients) * (1.0 - self.beta2);

        let m_hat = m.mapv(|x| x / (1.0 - self.beta1.powi(self.t as i32)));
        let v_hat = v.mapv(|x| x / (1.0 - self.beta2.powi(self.t as i32)));

        *biases -= &((&m_hat / (v_hat.mapv(f32::sqrt) + self.epsilon)) * learning_rate);
    }
}
