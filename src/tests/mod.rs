mod test_bellman;
mod test_config;
mod test_metrics;
mod test_trainer;
