//! # Chat Session
//!
//! File: cli/src/chat/session.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! `ChatSession` owns one ordered transcript. It is append-only apart from
//! `clear_all`, which resets it to empty.
//!
//! `submit` is the inbound operation shells call when the user commits a line:
//! 1. Blank input (empty after trimming) is ignored and appends nothing.
//! 2. Otherwise the trimmed text is appended as a user entry.
//! 3. The dispatcher produces the reply, appended as a bot entry.
//!
//! Each entry is stamped from the clock at the moment it is appended.
//!
use super::transcript::{ChatEntry, Clock, Sender};
use crate::intent::Dispatcher;
use tracing::debug;

/// The two entries one `submit` appended, plus the intent behind the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub user: ChatEntry,
    pub bot: ChatEntry,
    pub intent: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    entries: Vec<ChatEntry>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn append_entry(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    pub fn clear_all(&mut self) {
        debug!("Clearing transcript of {} entries", self.entries.len());
        self.entries.clear();
    }

    /// Records one user message and the bot's reply.
    ///
    /// Returns `None`, leaving the transcript untouched, for blank input.
    pub fn submit(
        &mut self,
        dispatcher: &Dispatcher,
        text: &str,
        clock: &dyn Clock,
    ) -> Option<Exchange> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let reply = dispatcher.dispatch(text)?;
        let user = ChatEntry {
            sender: Sender::User,
            message: text.to_string(),
            timestamp: clock.now_hhmm(),
        };
        let bot = ChatEntry {
            sender: Sender::Bot,
            message: reply.reply,
            timestamp: clock.now_hhmm(),
        };

        self.append_entry(user.clone());
        self.append_entry(bot.clone());
        Some(Exchange {
            user,
            bot,
            intent: reply.intent,
        })
    }
}
