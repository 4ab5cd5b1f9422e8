//! # Transcript Entries
//!
//! File: cli/src/chat/transcript.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! A transcript entry records who spoke, what was said and the wall-clock
//! time (HH:MM) at the moment it was appended. Time comes from a `Clock` so
//! shells use local time and tests can pin it.
//!
use chrono::Local;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Label shown in front of a message.
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatEntry {
    pub sender: Sender,
    pub message: String,
    /// Wall-clock time as `HH:MM`.
    pub timestamp: String,
}

impl fmt::Display for ChatEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.sender, self.timestamp, self.message)
    }
}

/// Source of entry timestamps.
pub trait Clock: Send + Sync {
    /// Current time formatted as `HH:MM`.
    fn now_hhmm(&self) -> String;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_hhmm(&self) -> String {
        Local::now().format("%H:%M").to_string()
    }
}

/// A clock stuck at one time.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

#[cfg(test)]
impl Clock for FixedClock {
    fn now_hhmm(&self) -> String {
        self.0.clone()
    }
}
