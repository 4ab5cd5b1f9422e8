//! # Intent Classifier Training
//!
//! File: cli/src/intent/classifier.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! `train` is the startup step of the intent pipeline. From an ordered set of
//! labeled examples it builds:
//! - an `IntentClassifier` (TF-IDF vectorizer followed by multinomial Naive Bayes)
//! - a `ReplyTable` mapping each intent to its canned response
//!
//! Training fails only on malformed data: no examples, fewer than two distinct
//! intents, patterns with no usable tokens, or (in strict mode) conflicting
//! responses for one intent. Callers treat any failure as fatal.
//!
use super::dataset::TrainingExample;
use super::naive_bayes::{MultinomialNb, DEFAULT_ALPHA};
use super::replies::{DuplicatePolicy, ReplyTable};
use super::tfidf::TfidfVectorizer;
use crate::core::error::{BloombotError, Result};
use anyhow::{anyhow, Context};
use tracing::info;

/// A trained text -> intent pipeline. Immutable and safe to share.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    vectorizer: TfidfVectorizer,
    model: MultinomialNb,
}

/// The outcome of classifying one text, with the score of every intent.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub intent: String,
    /// `(intent, joint log likelihood)` in model order.
    pub scores: Vec<(String, f64)>,
}

impl IntentClassifier {
    /// Fits the vectorizer on the patterns and the model on the resulting rows.
    pub fn fit(examples: &[TrainingExample]) -> Result<Self> {
        if examples.is_empty() {
            return Err(anyhow!(BloombotError::Training(
                "training set is empty".to_string()
            )));
        }

        let patterns: Vec<&str> = examples.iter().map(|e| e.pattern.as_str()).collect();
        let labels: Vec<String> = examples.iter().map(|e| e.intent.clone()).collect();

        let vectorizer = TfidfVectorizer::fit(&patterns)?;
        let rows = vectorizer.transform_all(&patterns);
        let model = MultinomialNb::fit(&rows, &labels, DEFAULT_ALPHA)?;

        Ok(Self { vectorizer, model })
    }

    /// Returns the most likely intent for `text`.
    ///
    /// Text without any known token still yields a label (the class with the
    /// highest prior).
    pub fn classify(&self, text: &str) -> &str {
        let row = self.vectorizer.transform(text);
        self.model.predict(&row)
    }

    /// Like `classify`, but also reports the per-intent scores.
    pub fn classify_detailed(&self, text: &str) -> Classification {
        let row = self.vectorizer.transform(text);
        let scores: Vec<(String, f64)> = self
            .model
            .classes()
            .iter()
            .cloned()
            .zip(self.model.joint_log_likelihood(&row))
            .collect();
        let intent = self.model.predict(&row).to_string();
        Classification { intent, scores }
    }

    /// Every intent the classifier can produce, sorted.
    pub fn intents(&self) -> &[String] {
        self.model.classes()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.n_features()
    }
}

/// Trains the classifier and builds the reply table from `examples`.
pub fn train(
    examples: &[TrainingExample],
    policy: DuplicatePolicy,
) -> Result<(IntentClassifier, ReplyTable)> {
    let classifier =
        IntentClassifier::fit(examples).context("Failed to train the intent classifier")?;
    let replies =
        ReplyTable::build(examples, policy).context("Failed to build the reply table")?;

    info!(
        "Trained intent classifier on {} examples: {} intents, {} vocabulary terms, {} replies",
        examples.len(),
        classifier.intents().len(),
        classifier.vocabulary_size(),
        replies.len()
    );

    Ok((classifier, replies))
}
