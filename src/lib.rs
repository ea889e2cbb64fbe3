//! # Lander DQN
//!
//! A small reinforcement-learning crate that trains an agent to land a
//! simulated spacecraft with Deep Q-Learning. The observation space is
//! continuous (an 8-dimensional lander state vector), so action-values are
//! approximated with a dense neural network instead of a lookup table.
//!
//! The trainer is deliberately the simplest online variant of DQN: every
//! transition is applied to the network immediately, in temporal order, with
//! a one-step Bellman target. There is no experience replay and no target
//! network.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lander_dqn::config::TrainerConfig;
//! use lander_dqn::optimizer::{OptimizerWrapper, SGD};
//! use lander_dqn::trainer::{ConsoleObserver, Trainer};
//! # use lander_dqn::env::{Environment, Step};
//! # use ndarray::Array1;
//! # struct Lander;
//! # impl Environment for Lander {
//! #     fn reset(&mut self) -> lander_dqn::error::Result<Array1<f32>> { unimplemented!() }
//! #     fn step(&mut self, _: usize) -> lander_dqn::error::Result<Step> { unimplemented!() }
//! # }
//!
//! let config = TrainerConfig::default();
//! let optimizer = OptimizerWrapper::SGD(SGD::new());
//! let mut trainer = Trainer::new(config, optimizer).unwrap();
//!
//! let mut env = Lander;
//! let mut observer = ConsoleObserver::new(100);
//! let mut rng = rand::thread_rng();
//! trainer.train(&mut env, &mut observer, &mut rng).unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation functions used by the value network
//! - [`bellman`] - One-step Bellman target construction
//! - [`config`] - Training hyperparameters and validation
//! - [`env`] - The environment collaborator trait
//! - [`error`] - Error types and result handling
//! - [`metrics`] - Per-episode reward log
//! - [`network`] - The Q-value function approximator
//! - [`optimizer`] - Gradient-step optimizers (SGD, Adam)
//! - [`policy`] - Epsilon-greedy action selection
//! - [`trainer`] - The episode driver

pub mod activations;
pub mod bellman;
pub mod config;
pub mod env;
pub mod error;
pub mod metrics;
pub mod network;
pub mod optimizer;
pub mod policy;
pub mod trainer;

#[cfg(test)]
mod tests;
