//! Tests for the state evaluator

use isis_adjacency::core::models::{CheckResult, Severity};
use isis_adjacency::core::services::{EvaluateError, check_neighbor, parse_section};

use crate::common::fixtures::{sample_rows, section_of};

#[test]
fn test_check_unknown_item() {
    let section = section_of(&[("10.0.0.1", 3), ("192.168.0.1", 3)]);
    assert_eq!(check_neighbor("foo", &section), Ok(vec![]));
}

#[test]
fn test_check_up() {
    let section = section_of(&[("10.0.0.1", 3), ("192.168.0.1", 1)]);
    assert_eq!(
        check_neighbor("10.0.0.1", &section),
        Ok(vec![CheckResult::new(Severity::Ok, "State with neighbor 10.0.0.1 is up")])
    );
}

#[test]
fn test_check_down() {
    let section = section_of(&[("10.0.0.1", 1), ("192.168.0.1", 3)]);
    assert_eq!(
        check_neighbor("10.0.0.1", &section),
        Ok(vec![CheckResult::new(Severity::Crit, "State with neighbor 10.0.0.1 is down")])
    );
}

#[test]
fn test_check_ipv6_item() {
    let section = parse_section(&sample_rows());
    let results = check_neighbor("fe80::43a8:bc11:839c:882c", &section).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].state, Severity::Warn);
    assert_eq!(
        results[0].summary,
        "State with neighbor fe80::43a8:bc11:839c:882c is initializing"
    );
}

#[test]
fn test_check_undefined_state_fails() {
    let section = section_of(&[("10.0.0.1", 0)]);
    assert!(matches!(
        check_neighbor("10.0.0.1", &section),
        Err(EvaluateError::UnknownState { state: 0, .. })
    ));
}

#[test]
fn test_check_is_repeatable() {
    let rows = sample_rows();
    let first = check_neighbor("192.168.0.1", &parse_section(&rows));
    let second = check_neighbor("192.168.0.1", &parse_section(&rows));
    assert_eq!(first, second);
}
