//! # Bloombot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command
//! runs inside a fresh temporary directory that looks like a git root, with
//! `HOME` and `XDG_CONFIG_HOME` pointed into it, so configuration files on the
//! machine running the tests are never picked up.
//!

#![allow(dead_code)]

pub use assert_cmd::Command;
use tempfile::TempDir;

/// Creates an isolated working directory for one test.
pub fn sandbox() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for test");
    std::fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}

/// # Get Bloombot Command (`bloombot_cmd`)
///
/// Returns an `assert_cmd::Command` for the compiled `bloombot` binary,
/// running inside `sandbox`.
pub fn bloombot_cmd(sandbox: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bloombot").expect("Failed to find bloombot binary for testing");
    cmd.current_dir(sandbox.path())
        .env("HOME", sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path().join(".config"))
        .env_remove("BLOOMBOT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
