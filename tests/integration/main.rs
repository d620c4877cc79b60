//! Integration tests for the isis-adjacency CLI
//!
//! These tests run the binary against walk files the way a monitoring
//! host would: parse → discover → check.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

use common::fixtures::SAMPLE_WALK;

/// Helper function to create an isis-adjacency command
fn isis() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("isis-adjacency"))
}

/// Write the sample walk into a temp dir
fn write_walk(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("walk.txt");
    fs::write(&path, SAMPLE_WALK).unwrap();
    path
}

fn write_config(temp: &TempDir, content: &str) -> PathBuf {
    let path = temp.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    isis()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("isis-adjacency"));
}

#[test]
fn test_help() {
    isis()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ISIS-MIB"));
}

#[test]
fn test_oids_json() {
    isis()
        .args(["--json", "oids"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".1.3.6.1.2.1.138.1.6.1.1.2"))
        .stdout(predicate::str::contains(".1.3.6.1.2.1.138.1.1.1.1.0"));
}

// =============================================================================
// PARSE
// =============================================================================

#[test]
fn test_parse_lists_neighbors() {
    let temp = TempDir::new().unwrap();
    let walk = write_walk(&temp);

    isis()
        .arg("--walk")
        .arg(&walk)
        .arg("parse")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 neighbor(s)"))
        .stdout(predicate::str::contains("fe80::8c21:b316:7d4e:a9dd"));
}

#[test]
fn test_parse_reads_stdin() {
    isis()
        .args(["--json", "parse"])
        .write_stdin(SAMPLE_WALK)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"192.168.0.1\""));
}

#[test]
fn test_missing_walk_file_is_unknown() {
    isis()
        .args(["--walk", "/nonexistent/walk.txt", "parse"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("/nonexistent/walk.txt"));
}

// =============================================================================
// DISCOVER
// =============================================================================

#[test]
fn test_discover_without_config_finds_all() {
    let temp = TempDir::new().unwrap();
    let walk = write_walk(&temp);
    let config = write_config(&temp, "");

    isis()
        .arg("--walk")
        .arg(&walk)
        .arg("--config")
        .arg(&config)
        .arg("discover")
        .assert()
        .success()
        .stdout(predicate::str::contains("Discovered 4 service(s)"))
        .stdout(predicate::str::contains("ISIS Status Neighbor 10.0.0.1"));
}

#[test]
fn test_discover_with_rules() {
    let temp = TempDir::new().unwrap();
    let walk = write_walk(&temp);
    let config = write_config(
        &temp,
        r#"
[[discovery_rules]]
subnets = ["fe80::/10"]
negate = true
labels = { af = "global" }
"#,
    );

    isis()
        .arg("--walk")
        .arg(&walk)
        .arg("--config")
        .arg(&config)
        .args(["--json", "discover"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"10.0.0.1\""))
        .stdout(predicate::str::contains("\"global\""))
        .stdout(predicate::str::contains("fe80").not());
}

#[test]
fn test_discover_rejects_invalid_config() {
    let temp = TempDir::new().unwrap();
    let walk = write_walk(&temp);
    let config = write_config(&temp, "[[discovery_rules]]\nsubnets = [\"10.0.0.0/99\"]\n");

    isis()
        .arg("--walk")
        .arg(&walk)
        .arg("--config")
        .arg(&config)
        .arg("discover")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("10.0.0.0/99"));
}

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn test_check_up_neighbor_is_ok() {
    let temp = TempDir::new().unwrap();
    let walk = write_walk(&temp);

    isis()
        .arg("--walk")
        .arg(&walk)
        .args(["check", "192.168.0.1"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("State with neighbor 192.168.0.1 is up"));
}

#[test]
fn test_check_initializing_neighbor_is_warn() {
    let temp = TempDir::new().unwrap();
    let walk = write_walk(&temp);

    isis()
        .arg("--walk")
        .arg(&walk)
        .args(["check", "10.0.0.1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("is initializing"));
}

#[test]
fn test_check_down_neighbor_is_crit() {
    isis()
        .args(["check", "10.0.0.9"])
        .write_stdin(
            "ISIS-MIB::isisISAdjState.1.1 = INTEGER: down(1)\n\
             ISIS-MIB::isisISAdjIPAddrAddress.1.1.1 = Hex-STRING: 0A 00 00 09\n",
        )
        .assert()
        .code(2)
        .stdout(predicate::str::contains("is down"));
}

#[test]
fn test_check_missing_item_is_unknown() {
    let temp = TempDir::new().unwrap();
    let walk = write_walk(&temp);

    isis()
        .arg("--walk")
        .arg(&walk)
        .args(["--json", "check", "172.16.0.1"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("\"UNKNOWN\""));
}

#[test]
fn test_check_undefined_state_is_unknown() {
    isis()
        .args(["check", "10.0.0.9"])
        .write_stdin(
            "ISIS-MIB::isisISAdjState.1.1 = INTEGER: 7\n\
             ISIS-MIB::isisISAdjIPAddrAddress.1.1.1 = Hex-STRING: 0A 00 00 09\n",
        )
        .assert()
        .code(3)
        .stdout(predicate::str::contains("undefined adjacency state 7"));
}

#[test]
fn test_check_empty_state_is_not_inherited() {
    isis()
        .args(["check", "10.0.0.2"])
        .write_stdin(
            "ISIS-MIB::isisISAdjState.1.1 = INTEGER: up(3)\n\
             ISIS-MIB::isisISAdjState.2.1 = INTEGER:\n\
             ISIS-MIB::isisISAdjIPAddrAddress.1.1.1 = Hex-STRING: 0A 00 00 01\n\
             ISIS-MIB::isisISAdjIPAddrAddress.2.1.1 = Hex-STRING: 0A 00 00 02\n",
        )
        .assert()
        .code(3);
}
