//! # Word Tokenizer
//!
//! File: cli/src/intent/tokenizer.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! Lowercases text and extracts every run of two or more word characters.
//! Single-character words ("i", "a") are dropped, so they never enter the
//! vocabulary. The same tokenizer is used when fitting the vectorizer and when
//! featurising user input, which keeps the two sides aligned.
//!
use crate::core::error::{BloombotError, Result};
use anyhow::anyhow;
use regex::Regex;

const TOKEN_PATTERN: &str = r"\b\w\w+\b";

#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(TOKEN_PATTERN).map_err(|e| {
            anyhow!(BloombotError::Training(format!(
                "invalid token pattern '{}': {}",
                TOKEN_PATTERN, e
            )))
        })?;
        Ok(Self { pattern })
    }

    /// Splits `text` into lowercase tokens, in order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test lowercasing and the two-character minimum.
    #[test]
    fn test_lowercases_and_drops_short_words() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(tokenizer.tokenize("I feel SAD"), vec!["feel", "sad"]);
        assert_eq!(tokenizer.tokenize("I am a bit anxious"), vec!["am", "bit", "anxious"]);
    }

    /// Test that punctuation separates words.
    #[test]
    fn test_punctuation_splits_tokens() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(
            tokenizer.tokenize("thank-you, bot!! :)"),
            vec!["thank", "you", "bot"]
        );
    }

    /// Test inputs that contain no tokens at all.
    #[test]
    fn test_empty_and_symbol_only_input() {
        let tokenizer = Tokenizer::new().unwrap();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
        assert!(tokenizer.tokenize("?! 🌸 x").is_empty());
    }

    /// Test that non-ASCII letters count as word characters.
    #[test]
    fn test_unicode_words() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(tokenizer.tokenize("Ça VA très bien"), vec!["ça", "va", "très", "bien"]);
    }
}
