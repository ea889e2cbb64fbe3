use rand::Rng;

use crate::bellman;
use crate::config::TrainerConfig;
use crate::env::Environment;
use crate::error::{LanderError, Result};
use crate::metrics::RewardLog;
use crate::network::QNetwork;
use crate::optimizer::OptimizerWrapper;
use crate::policy;

/// Receives run progress. Keeps the core free of any rendering or plotting
/// dependency.
pub trait RunObserver {
    /// Called once per completed episode with its cumulative reward.
    fn episode_complete(&mut self, episode: usize, reward: f32);

    /// Called once after the final episode with the full reward log.
    fn run_complete(&mut self, rewards: &[f32]) {
        let _ = rewards;
    }
}

/// Observer that ignores everything.
pub struct NullObserver;

impl RunObserver for NullObserver {
    fn episode_complete(&mut self, _episode: usize, _reward: f32) {}
}

/// Prints one text line per episode and a trailing-window average at the end
/// of the run.
pub struct ConsoleObserver {
    window: usize,
}

impl ConsoleObserver {
    pub fn new(window: usize) -> Self {
        ConsoleObserver { window }
    }
}

impl RunObserver for ConsoleObserver {
    fn episode_complete(&mut self, episode: usize, reward: f32) {
        println!("Episode: {}, Reward: {:.2}", episode + 1, reward);
    }

    fn run_complete(&mut self, rewards: &[f32]) {
        let n = self.window.min(rewards.len());
        if n == 0 {
            return;
        }
        let avg: f32 = rewards.iter().rev().take(n).sum::<f32>() / n as f32;
        println!("Average reward over last {} episodes: {:.2}", n, avg);
    }
}

/// The episode driver.
///
/// Owns the value network, the exploration state, and the reward log. Runs
/// strictly serially: one transition at a time, each applied to the network
/// immediately, in temporal order.
pub struct Trainer {
    config: TrainerConfig,
    network: QNetwork,
    epsilon: f32,
    reward_log: RewardLog,
}

impl Trainer {
    /// Create a trainer with a freshly initialized lander network.
    pub fn new(config: TrainerConfig, optimizer: OptimizerWrapper) -> Result<Self> {
        config.validate()?;
        let network =
            QNetwork::lander_default(config.observation_dim, config.action_count, optimizer)?;
        Ok(Self::assemble(config, network))
    }

    /// Create a trainer around an existing network, e.g. one restored from a
    /// checkpoint. The network's dimensions must match the configuration.
    pub fn with_network(config: TrainerConfig, network: QNetwork) -> Result<Self> {
        config.validate()?;
        if network.input_dim() != config.observation_dim
            || network.output_dim() != config.action_count
        {
            return Err(LanderError::dimension_mismatch(
                format!(
                    "network with input {} and output {}",
                    config.observation_dim, config.action_count
                ),
                format!(
                    "input {} and output {}",
                    network.input_dim(),
                    network.output_dim()
                ),
            ));
        }
        Ok(Self::assemble(config, network))
    }

    /// Restore the network from a saved checkpoint. Missing or corrupt files
    /// are hard errors.
    pub fn from_checkpoint(config: TrainerConfig, path: &str) -> Result<Self> {
        let network = QNetwork::load(path)?;
        Self::with_network(config, network)
    }

    fn assemble(config: TrainerConfig, network: QNetwork) -> Self {
        let epsilon = config.epsilon;
        Trainer {
            config,
            network,
            epsilon,
            reward_log: RewardLog::new(),
        }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Current exploration probability. Non-increasing across episodes,
    /// bounded below by the configured floor.
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    pub fn network(&self) -> &QNetwork {
        &self.network
    }

    pub fn reward_log(&self) -> &RewardLog {
        &self.reward_log
    }

    /// Save the network parameters to a checkpoint file.
    pub fn save_checkpoint(&self, path: &str) -> Result<()> {
        self.network.save(path)
    }

    /// Run the configured number of episodes.
    ///
    /// Each step evaluates the current observation, picks an epsilon-greedy
    /// action, steps the environment, and fits the network toward the
    /// one-step Bellman target before moving on. Epsilon decays once per
    /// episode. Any environment or network failure aborts the run.
    pub fn train<E, O, R>(
        &mut self,
        env: &mut E,
        observer: &mut O,
        rng: &mut R,
    ) -> Result<&[f32]>
    where
        E: Environment,
        O: RunObserver,
        R: Rng,
    {
        log::info!(
            "starting run: {} episodes, gamma {}, lr {}",
            self.config.episodes,
            self.config.gamma,
            self.config.learning_rate
        );

        for episode in 0..self.config.episodes {
            let episode_reward = self.run_episode(env, rng)?;

            self.reward_log.push(episode_reward);
            self.epsilon = self
                .config
                .epsilon_min
                .max(self.epsilon * self.config.epsilon_decay);
            log::debug!(
                "episode {} finished: reward {:.2}, epsilon {:.3}",
                episode,
                episode_reward,
                self.epsilon
            );
            observer.episode_complete(episode, episode_reward);
        }

        observer.run_complete(self.reward_log.as_slice());
        Ok(self.reward_log.as_slice())
    }

    fn run_episode<E, R>(&mut self, env: &mut E, rng: &mut R) -> Result<f32>
    where
        E: Environment,
        R: Rng,
    {
        let mut observation = env.reset()?;
        let mut episode_reward = 0.0;

        loop {
            let values = self.network.evaluate(observation.view())?;
            let action = policy::select(values.view(), self.epsilon, rng)?;
            let step = env.step(action)?;

            let next_values = self.network.evaluate(step.observation.view())?;
            let target = bellman::target(step.reward, next_values.view(), self.config.gamma, step.done);
            let targets = bellman::target_vector(&values, action, target)?;
            self.network
                .fit(observation.view(), targets.view(), self.config.learning_rate)?;

            episode_reward += step.reward;
            observation = step.observation;
            if step.done {
                break;
            }
        }

        Ok(episode_reward)
    }

    /// Roll out one episode greedily (no exploration, no learning) and
    /// return its cumulative reward.
    pub fn run_greedy<E: Environment>(&mut self, env: &mut E) -> Result<f32> {
        let mut observation = env.reset()?;
        let mut episode_reward = 0.0;

        loop {
            let values = self.network.evaluate(observation.view())?;
            let action = policy::greedy(values.view())?;
            let step = env.step(action)?;

            episode_reward += step.reward;
            observation = step.observation;
            if step.done {
                break;
            }
        }

        Ok(episode_reward)
    }
}
