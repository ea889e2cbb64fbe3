use crate::metrics::RewardLog;

#[test]
fn test_log_is_append_only_and_ordered() {
    let mut log = RewardLog::new();
    assert!(log.is_empty());

    log.push(-100.0);
    log.push(50.0);
    log.push(10.0);

    assert_eq!(log.len(), 3);
    assert_eq!(log.as_slice(), &[-100.0, 50.0, 10.0]);
}

#[test]
fn test_trailing_average() {
    let mut log = RewardLog::new();
    assert_eq!(log.trailing_average(10), None);

    log.push(1.0);
    log.push(2.0);
    log.push(3.0);
    log.push(4.0);

    assert_eq!(log.trailing_average(2), Some(3.5));
    // Window larger than the log averages everything.
    assert_eq!(log.trailing_average(100), Some(2.5));
    assert_eq!(log.trailing_average(0), None);
}
