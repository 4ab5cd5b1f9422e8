//! # Bloombot Intent Pipeline
//!
//! File: cli/src/intent/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! This module holds the conversational core of Bloombot: a tiny text
//! classifier trained once at startup and the dispatcher that turns a
//! classified message into a canned reply.
//!
//! ## Architecture
//!
//! - `dataset`: the fixed labeled training examples
//! - `tokenizer`: lowercasing word tokenizer shared by training and prediction
//! - `tfidf`: TF-IDF vectorizer with smoothed idf and L2-normalised rows
//! - `naive_bayes`: multinomial Naive Bayes over the TF-IDF features
//! - `classifier`: the trained vectorizer + model pipeline and `train`
//! - `replies`: the intent -> response table and its duplicate policy
//! - `dispatcher`: `reply(text)`, the only operation invoked per message
//!
//! The pipeline has no dependency on the web or terminal shells. Everything
//! built here is immutable after training and shared read-only.
//!
pub mod classifier;
pub mod dataset;
pub mod dispatcher;
pub mod naive_bayes;
pub mod replies;
pub mod tfidf;
pub mod tokenizer;

pub use dispatcher::{Dispatcher, Reply};
pub use replies::DuplicatePolicy;
