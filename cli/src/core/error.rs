//! # Bloombot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! This module defines the error types used throughout Bloombot. Specific,
//! matchable failures are modelled by `BloombotError`; everything is propagated
//! through `anyhow` so callers can attach context on the way up.
//!
//! ## Architecture
//!
//! - `BloombotError`: a `thiserror` enum for the failure classes Bloombot knows about
//! - `Result<T>`: a type alias for `anyhow::Result<T>`
//!
//! The error classes cover:
//! - Training precondition failures (startup-fatal)
//! - Conflicting duplicate-intent responses when strict mode is configured
//! - Configuration errors
//! - Chat page rendering errors
//!
//! ## Examples
//!
//! ```rust
//! // Reject a training set with a single label
//! if classes.len() < 2 {
//!     return Err(anyhow!(BloombotError::Training(
//!         "need at least 2 distinct intents".into()
//!     )));
//! }
//!
//! // Check for a specific error further up
//! match result {
//!     Err(e) if e.downcast_ref::<BloombotError>().map_or(false, |be| matches!(be, BloombotError::Training(_))) => {
//!         eprintln!("The built-in training data is malformed.");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Bloombot application.
#[derive(Error, Debug)]
pub enum BloombotError {
    #[error("Training error: {0}")]
    Training(String),

    #[error(
        "Intent '{intent}' has conflicting responses: kept '{kept}', rejected '{rejected}'"
    )]
    ConflictingResponse {
        intent: String,
        kept: String,
        rejected: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
