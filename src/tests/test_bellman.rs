use crate::bellman::{target, target_vector};
use ndarray::array;

#[test]
fn test_terminal_target_is_reward() {
    let next_values = array![10.0, 20.0, 30.0, 40.0];
    assert_eq!(target(-100.0, next_values.view(), 0.9, true), -100.0);
    assert_eq!(target(5.0, next_values.view(), 0.0, true), 5.0);
}

#[test]
fn test_nonterminal_target_discounts_best_next_value() {
    let next_values = array![0.2, 0.5, 0.1, 0.0];
    let t = target(-1.0, next_values.view(), 0.9, false);
    assert!((t - (-0.55)).abs() < 1e-6);
}

#[test]
fn test_target_vector_replaces_only_taken_action() {
    let values = array![1.0, 2.0, 3.0, 4.0];
    let targets = target_vector(&values, 2, -100.0).unwrap();
    assert_eq!(targets, array![1.0, 2.0, -100.0, 4.0]);
}

#[test]
fn test_target_vector_rejects_out_of_range_action() {
    let values = array![1.0, 2.0];
    assert!(target_vector(&values, 2, 0.0).is_err());
}
