//! # Bloombot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: configuration loading, merging and validation
//! - `error`: the `BloombotError` type and the crate-wide `Result` alias
//! - `templating`: Tera rendering of the chat page
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{BloombotError, Result}; // For error handling
//! use crate::core::templating::PageRenderer; // For rendering the chat page
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
