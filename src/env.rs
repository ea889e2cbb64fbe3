use ndarray::Array1;

use crate::error::Result;

/// One environment transition: the next observation, the reward earned by
/// the step, and whether the episode terminated.
#[derive(Clone, Debug)]
pub struct Step {
    pub observation: Array1<f32>,
    pub reward: f32,
    pub done: bool,
}

/// The external environment collaborator.
///
/// The trainer treats any error from `reset` or `step` as fatal to the run;
/// there is no retry or partial-episode recovery.
pub trait Environment {
    /// Begin a new episode and return the initial observation.
    fn reset(&mut self) -> Result<Array1<f32>>;

    /// Apply an action and advance the simulation by one step.
    fn step(&mut self, action: usize) -> Result<Step>;
}
