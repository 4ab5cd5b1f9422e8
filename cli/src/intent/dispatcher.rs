//! # Reply Dispatcher
//!
//! File: cli/src/intent/dispatcher.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! The per-message entry point of the intent pipeline. `Dispatcher::reply`
//! trims the input, classifies it and looks the intent up in the reply table,
//! substituting `DEFAULT_REPLY` when the intent has no registered response.
//!
//! Blank input (empty after trimming) is not classified at all and yields
//! `None`; callers must not record anything for it. Any other input yields a
//! non-empty reply. The dispatcher holds no per-call state and can be shared
//! across threads behind an `Arc`.
//!
use super::classifier::{train, Classification, IntentClassifier};
use super::dataset::{builtin_examples, TrainingExample};
use super::replies::{DuplicatePolicy, ReplyTable};
use crate::core::error::Result;
use serde::Serialize;
use tracing::debug;

/// Reply used when the classified intent has no entry in the reply table.
pub const DEFAULT_REPLY: &str = "I'm here to listen. 🌸";

/// A dispatched reply together with the intent that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub intent: String,
    pub reply: String,
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    classifier: IntentClassifier,
    replies: ReplyTable,
}

impl Dispatcher {
    pub fn new(classifier: IntentClassifier, replies: ReplyTable) -> Self {
        Self {
            classifier,
            replies,
        }
    }

    /// Trains on `examples` and wraps the result.
    pub fn from_examples(examples: &[TrainingExample], policy: DuplicatePolicy) -> Result<Self> {
        let (classifier, replies) = train(examples, policy)?;
        Ok(Self::new(classifier, replies))
    }

    /// Trains on the built-in example set.
    pub fn builtin(policy: DuplicatePolicy) -> Result<Self> {
        Self::from_examples(&builtin_examples(), policy)
    }

    /// The reply text for `user_text`, or `None` for blank input.
    pub fn reply(&self, user_text: &str) -> Option<String> {
        self.dispatch(user_text).map(|r| r.reply)
    }

    /// Like `reply`, but keeps the intent that was chosen.
    pub fn dispatch(&self, user_text: &str) -> Option<Reply> {
        let text = user_text.trim();
        if text.is_empty() {
            return None;
        }

        let intent = self.classifier.classify(text);
        debug!("Classified '{}' as '{}'", text, intent);

        Some(Reply {
            intent: intent.to_string(),
            reply: self.reply_for(intent).to_string(),
        })
    }

    /// The registered response for `intent`, or `DEFAULT_REPLY`.
    pub fn reply_for(&self, intent: &str) -> &str {
        self.replies.get(intent).unwrap_or(DEFAULT_REPLY)
    }

    /// Per-intent scores for `user_text`, or `None` for blank input.
    pub fn explain(&self, user_text: &str) -> Option<Classification> {
        let text = user_text.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.classifier.classify_detailed(text))
    }

    pub fn intents(&self) -> &[String] {
        self.classifier.intents()
    }
}
