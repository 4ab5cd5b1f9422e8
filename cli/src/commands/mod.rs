//! # Bloombot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! One module per top-level command. Each defines its own arguments struct
//! and an async handler taking those arguments and the loaded configuration.
//!
//! - `serve`: the web chat page
//! - `chat`: the terminal chat loop
//! - `classify`: one-shot classification for a single message
//!

/// Interactive chat on stdin/stdout.
pub mod chat;
/// One-shot intent classification.
pub mod classify;
/// Web chat server. Includes configuration, sessions and server logic.
pub mod serve;
