//! # Bloombot Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! Feeds a scripted conversation to `bloombot chat` on stdin.
//!

mod common;
use common::*;
use predicates::prelude::*;

/// Test a scripted terminal conversation.
#[test]
fn test_chat_script() {
    let sandbox = sandbox();
    bloombot_cmd(&sandbox)
        .arg("chat")
        .write_stdin("hi\n\n/clear\ni am anxious\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("🌸 Universal AI Chatbot"))
        .stdout(predicate::str::is_match(r"You \(\d\d:\d\d\): hi\n").unwrap())
        .stdout(predicate::str::contains(
            "): Hello! How are you feeling today? 😊",
        ))
        .stdout(predicate::str::contains("(chat cleared)"))
        .stdout(predicate::str::contains(
            "): Take a deep breath. Try to focus on positive thoughts. 🌸",
        ));
}

/// Test that `page.title` from `.bloombot.toml` heads the chat output.
#[test]
fn test_chat_uses_configured_title() {
    let sandbox = sandbox();
    std::fs::write(
        sandbox.path().join(".bloombot.toml"),
        "[page]\ntitle = \"Calm Corner\"\n",
    )
    .unwrap();
    bloombot_cmd(&sandbox)
        .arg("chat")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Calm Corner\n"));
}
