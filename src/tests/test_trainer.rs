use crate::config::TrainerConfig;
use crate::env::{Environment, Step};
use crate::error::{LanderError, Result};
use crate::optimizer::{OptimizerWrapper, SGD};
use crate::trainer::{NullObserver, RunObserver, Trainer};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic environment: fixed-length episodes, reward 1.0 per step.
struct FixedEnv {
    dim: usize,
    episode_len: usize,
    current_step: usize,
}

impl FixedEnv {
    fn new(dim: usize, episode_len: usize) -> Self {
        FixedEnv {
            dim,
            episode_len,
            current_step: 0,
        }
    }

    fn observation(&self) -> Array1<f32> {
        Array1::from_elem(self.dim, self.current_step as f32 / 10.0)
    }
}

impl Environment for FixedEnv {
    fn reset(&mut self) -> Result<Array1<f32>> {
        self.current_step = 0;
        Ok(self.observation())
    }

    fn step(&mut self, _action: usize) -> Result<Step> {
        self.current_step += 1;
        Ok(Step {
            observation: self.observation(),
            reward: 1.0,
            done: self.current_step >= self.episode_len,
        })
    }
}

/// Environment whose step always fails.
struct BrokenEnv;

impl Environment for BrokenEnv {
    fn reset(&mut self) -> Result<Array1<f32>> {
        Ok(Array1::zeros(2))
    }

    fn step(&mut self, _action: usize) -> Result<Step> {
        Err(LanderError::EnvironmentError("simulator crashed".to_string()))
    }
}

struct CountingObserver {
    episodes: Vec<(usize, f32)>,
    run_complete_calls: usize,
    final_log_len: usize,
}

impl CountingObserver {
    fn new() -> Self {
        CountingObserver {
            episodes: Vec::new(),
            run_complete_calls: 0,
            final_log_len: 0,
        }
    }
}

impl RunObserver for CountingObserver {
    fn episode_complete(&mut self, episode: usize, reward: f32) {
        self.episodes.push((episode, reward));
    }

    fn run_complete(&mut self, rewards: &[f32]) {
        self.run_complete_calls += 1;
        self.final_log_len = rewards.len();
    }
}

fn small_config(episodes: usize) -> TrainerConfig {
    TrainerConfig {
        observation_dim: 2,
        action_count: 3,
        episodes,
        ..TrainerConfig::default()
    }
}

#[test]
fn test_reward_log_matches_episode_sums() {
    let mut trainer = Trainer::new(small_config(5), OptimizerWrapper::SGD(SGD::new())).unwrap();
    let mut env = FixedEnv::new(2, 7);
    let mut observer = CountingObserver::new();
    let mut rng = StdRng::seed_from_u64(1);

    let rewards = trainer.train(&mut env, &mut observer, &mut rng).unwrap();
    assert_eq!(rewards.len(), 5);
    // 7 steps of reward 1.0 per episode.
    for &r in rewards {
        assert!((r - 7.0).abs() < 1e-6);
    }

    assert_eq!(observer.episodes.len(), 5);
    assert_eq!(observer.episodes[0].0, 0);
    assert_eq!(observer.episodes[4].0, 4);
    assert_eq!(observer.run_complete_calls, 1);
    assert_eq!(observer.final_log_len, 5);
    assert_eq!(trainer.reward_log().len(), 5);
}

#[test]
fn test_epsilon_decays_each_episode() {
    let mut trainer = Trainer::new(small_config(5), OptimizerWrapper::SGD(SGD::new())).unwrap();
    let mut env = FixedEnv::new(2, 2);
    let mut rng = StdRng::seed_from_u64(2);

    trainer
        .train(&mut env, &mut NullObserver, &mut rng)
        .unwrap();
    let expected = 0.995f32.powi(5);
    assert!((trainer.epsilon() - expected).abs() < 1e-6);
}

#[test]
fn test_epsilon_is_floored() {
    let config = TrainerConfig {
        epsilon: 0.5,
        epsilon_decay: 0.5,
        epsilon_min: 0.4,
        ..small_config(3)
    };
    let mut trainer = Trainer::new(config, OptimizerWrapper::SGD(SGD::new())).unwrap();
    let mut env = FixedEnv::new(2, 1);
    let mut rng = StdRng::seed_from_u64(3);

    trainer
        .train(&mut env, &mut NullObserver, &mut rng)
        .unwrap();
    // 0.5 -> 0.4 after the first episode, then pinned at the floor.
    assert!((trainer.epsilon() - 0.4).abs() < 1e-6);
}

#[test]
fn test_epsilon_reaches_floor_over_long_run() {
    let mut trainer =
        Trainer::new(small_config(1000), OptimizerWrapper::SGD(SGD::new())).unwrap();
    let mut env = FixedEnv::new(2, 1);
    let mut rng = StdRng::seed_from_u64(4);

    let initial = trainer.epsilon();
    trainer
        .train(&mut env, &mut NullObserver, &mut rng)
        .unwrap();
    // 0.995^1000 is far below the 0.1 floor.
    assert!((trainer.epsilon() - 0.1).abs() < 1e-6);
    assert!(trainer.epsilon() <= initial);
}

#[test]
fn test_environment_failure_is_fatal() {
    let mut trainer = Trainer::new(small_config(3), OptimizerWrapper::SGD(SGD::new())).unwrap();
    let mut env = BrokenEnv;
    let mut rng = StdRng::seed_from_u64(5);

    let result = trainer.train(&mut env, &mut NullObserver, &mut rng);
    assert!(result.is_err());
    // Nothing was logged for the aborted episode.
    assert_eq!(trainer.reward_log().len(), 0);
}

#[test]
fn test_mismatched_network_is_rejected() {
    use crate::network::QNetwork;

    let network = QNetwork::lander_default(4, 2, OptimizerWrapper::SGD(SGD::new())).unwrap();
    let result = Trainer::with_network(small_config(1), network);
    assert!(result.is_err());
}

#[test]
fn test_run_greedy_collects_reward_without_learning() {
    let mut trainer = Trainer::new(small_config(1), OptimizerWrapper::SGD(SGD::new())).unwrap();
    let mut env = FixedEnv::new(2, 4);

    let reward = trainer.run_greedy(&mut env).unwrap();
    assert!((reward - 4.0).abs() < 1e-6);
    assert_eq!(trainer.reward_log().len(), 0);
}
