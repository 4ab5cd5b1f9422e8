//! # Bloombot CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! Top-level behaviour of the `bloombot` binary: standard flags, the
//! required subcommand and configuration failures.
//!

mod common;
use common::*;
use predicates::prelude::*;

/// Test the `--help` output.
#[test]
fn test_help_flag() {
    let sandbox = sandbox();
    bloombot_cmd(&sandbox)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("classify"));
}

#[test]
fn test_version_flag() {
    let sandbox = sandbox();
    bloombot_cmd(&sandbox)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that running with no subcommand fails with usage.
#[test]
fn test_missing_subcommand_fails() {
    let sandbox = sandbox();
    bloombot_cmd(&sandbox).assert().failure();
}

/// Test that an invalid project config stops the program.
#[test]
fn test_invalid_project_config_is_fatal() {
    let sandbox = sandbox();
    std::fs::write(sandbox.path().join(".bloombot.toml"), "[server]\nport = 0\n").unwrap();
    bloombot_cmd(&sandbox)
        .args(["classify", "hi"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("server.port"));
}

/// Test that a missing `--config` file stops the program.
#[test]
fn test_missing_explicit_config_is_fatal() {
    let sandbox = sandbox();
    bloombot_cmd(&sandbox)
        .args(["--config", "nope.toml", "classify", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
