use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Append-only log of per-episode cumulative rewards.
///
/// One entry per completed episode, in order. The log exists for progress
/// reporting and external plotting only; training never reads it back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewardLog {
    rewards: Vec<f32>,
}

impl RewardLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, episode_reward: f32) {
        self.rewards.push(episode_reward);
    }

    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.rewards
    }

    /// Average reward over the most recent `window` episodes.
    pub fn trailing_average(&self, window: usize) -> Option<f32> {
        if self.rewards.is_empty() || window == 0 {
            return None;
        }
        let n = window.min(self.rewards.len());
        let sum: f32 = self.rewards.iter().rev().take(n).sum();
        Some(sum / n as f32)
    }

    /// Write the log as JSON for external plotting.
    pub fn save(&self, path: &str) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.rewards)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }
}
