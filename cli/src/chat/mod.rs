//! # Bloombot Chat Sessions
//!
//! File: cli/src/chat/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! The transcript side of Bloombot. A `ChatSession` is an explicit,
//! caller-owned context object: shells create one per user (per browser
//! session on the web, one per process in the terminal) and pass it to
//! `submit` together with the shared `Dispatcher`.
//!
//! ## Architecture
//!
//! - `transcript`: chat entries, senders and the clock that stamps them
//! - `session`: the `ChatSession` with `submit`, `append_entry` and `clear_all`
//!
pub mod session;
pub mod transcript;

pub use session::{ChatSession, Exchange};
pub use transcript::{ChatEntry, Clock, Sender, SystemClock};
