//! # Bloombot Classify Integration Tests
//!
//! File: cli/tests/classify.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! Runs `bloombot classify` end to end against the built-in training set.
//!

mod common;
use common::*;
use predicates::prelude::*;

/// Test `bloombot classify hi`.
#[test]
fn test_classify_greeting() {
    let sandbox = sandbox();
    bloombot_cmd(&sandbox)
        .args(["classify", "hi"])
        .assert()
        .success()
        .stdout("intent: greeting\nreply: Hello! How are you feeling today? 😊\n");
}

#[test]
fn test_classify_joins_words() {
    let sandbox = sandbox();
    bloombot_cmd(&sandbox)
        .args(["classify", "thank", "you"])
        .assert()
        .success()
        .stdout(predicate::str::contains("intent: thanks"))
        .stdout(predicate::str::contains(
            "reply: You are welcome! I am always here to help. 🌸",
        ));
}

#[test]
fn test_classify_blank_text() {
    let sandbox = sandbox();
    bloombot_cmd(&sandbox)
        .args(["classify", "   "])
        .assert()
        .success()
        .stdout("(no input)\n");
}

/// Test that unknown words still produce an intent and a reply.
#[test]
fn test_classify_gibberish_still_replies() {
    let sandbox = sandbox();
    bloombot_cmd(&sandbox)
        .args(["classify", "xyz completely unrelated gibberish"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^intent: (anxious|goodbye|greeting|happy|sad|thanks)\nreply: .+\n$",
        )
        .unwrap());
}

/// Test that the reject policy makes the built-in set fail at startup.
#[test]
fn test_strict_duplicate_policy_refuses_to_start() {
    let sandbox = sandbox();
    let config_path = sandbox.path().join("strict.toml");
    std::fs::write(&config_path, "[training]\nduplicate_responses = \"reject\"\n").unwrap();

    bloombot_cmd(&sandbox)
        .arg("--config")
        .arg(&config_path)
        .args(["classify", "hi"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("conflicting responses"));
}
