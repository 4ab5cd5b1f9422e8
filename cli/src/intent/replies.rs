//! # Reply Table
//!
//! File: cli/src/intent/replies.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! Maps each intent to exactly one canned response. The table is built once
//! from the training examples and is read-only afterwards.
//!
//! When several examples share an intent but carry different responses, the
//! outcome is decided by `DuplicatePolicy`:
//! - `KeepFirst` (default): the first declared response is kept, later ones
//!   are logged and ignored
//! - `Reject`: building the table fails with `BloombotError::ConflictingResponse`
//!
//! Repeating an intent with an identical response is never a conflict.
//!
use super::dataset::TrainingExample;
use crate::core::error::{BloombotError, Result};
use anyhow::anyhow;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// How to treat an intent that appears with more than one distinct response.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    #[default]
    KeepFirst,
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct ReplyTable {
    responses: BTreeMap<String, String>,
}

impl ReplyTable {
    pub fn build(examples: &[TrainingExample], policy: DuplicatePolicy) -> Result<Self> {
        let mut responses: BTreeMap<String, String> = BTreeMap::new();
        let mut ignored = 0usize;

        for example in examples {
            match responses.get(&example.intent) {
                None => {
                    responses.insert(example.intent.clone(), example.response.clone());
                }
                Some(kept) if *kept == example.response => {}
                Some(kept) => match policy {
                    DuplicatePolicy::Reject => {
                        return Err(anyhow!(BloombotError::ConflictingResponse {
                            intent: example.intent.clone(),
                            kept: kept.clone(),
                            rejected: example.response.clone(),
                        }));
                    }
                    DuplicatePolicy::KeepFirst => {
                        debug!(
                            "Intent '{}' already answers '{}'; ignoring '{}' from pattern '{}'",
                            example.intent, kept, example.response, example.pattern
                        );
                        ignored += 1;
                    }
                },
            }
        }

        if ignored > 0 {
            info!(
                "Reply table kept the first response for repeated intents ({} alternate responses ignored)",
                ignored
            );
        }

        Ok(Self { responses })
    }

    /// The response for `intent`, if one is registered.
    pub fn get(&self, intent: &str) -> Option<&str> {
        self.responses.get(intent).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::dataset::builtin_examples;

    /// Test the built-in table under the default keep-first policy.
    #[test]
    fn test_builtin_table_keeps_first_response() {
        let table = ReplyTable::build(&builtin_examples(), DuplicatePolicy::KeepFirst).unwrap();
        assert_eq!(table.len(), 6);
        assert_eq!(
            table.get("greeting"),
            Some("Hello! How are you feeling today? 😊")
        );
        assert_eq!(
            table.get("goodbye"),
            Some("Goodbye! Take care of yourself. 🌸")
        );
        assert_eq!(
            table.get("thanks"),
            Some("You are welcome! I am always here to help. 🌸")
        );
        assert_eq!(table.get("unknown"), None);
    }

    /// Test that the reject policy reports the intent and both responses.
    #[test]
    fn test_reject_policy_fails_on_conflict() {
        let err = ReplyTable::build(&builtin_examples(), DuplicatePolicy::Reject).unwrap_err();
        match err.downcast_ref::<BloombotError>() {
            Some(BloombotError::ConflictingResponse {
                intent,
                kept,
                rejected,
            }) => {
                assert_eq!(intent, "greeting");
                assert_eq!(kept, "Hello! How are you feeling today? 😊");
                assert_eq!(rejected, "Hi there! I am here to listen. 🌸");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_identical_duplicates_are_not_conflicts() {
        let examples = vec![
            TrainingExample::new("hi", "greeting", "Hello!"),
            TrainingExample::new("hello", "greeting", "Hello!"),
            TrainingExample::new("bye", "goodbye", "Bye!"),
        ];
        let table = ReplyTable::build(&examples, DuplicatePolicy::Reject).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("greeting"), Some("Hello!"));
        assert_eq!(table.get("goodbye"), Some("Bye!"));
    }

    /// Test the TOML spelling of each policy.
    #[test]
    fn test_policy_deserializes_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: DuplicatePolicy,
        }
        let parsed: Wrapper = toml::from_str(r#"policy = "reject""#).unwrap();
        assert_eq!(parsed.policy, DuplicatePolicy::Reject);
        let parsed: Wrapper = toml::from_str(r#"policy = "keep-first""#).unwrap();
        assert_eq!(parsed.policy, DuplicatePolicy::KeepFirst);
    }
}
