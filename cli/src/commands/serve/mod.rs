//! # Bloombot Web Chat Server
//!
//! File: cli/src/commands/serve/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! `bloombot serve` trains the intent pipeline once and serves the chat page.
//! Every browser gets its own transcript; the trained dispatcher is shared by
//! all of them.
//!
//! ## Architecture
//!
//! - `config.rs`: merging command-line flags with the loaded configuration
//! - `sessions.rs`: per-browser transcripts keyed by a session cookie
//! - `server_logic.rs`: the Axum router, handlers and server lifecycle
//!
//! ## Examples
//!
//! ```bash
//! # Serve on the default address (http://127.0.0.1:8501)
//! bloombot serve
//!
//! # Listen on all interfaces, port 9000
//! bloombot serve --host 0.0.0.0 --port 9000
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::intent::Dispatcher;
use std::sync::Arc;
use tracing::info;

pub use config::ServeArgs;

/// Merges command-line flags with the loaded configuration.
pub mod config;

/// Contains the Axum-based HTTP server implementation.
pub mod server_logic;

/// Per-browser chat sessions.
pub mod sessions;

/// # Handle Serve Command (`handle_serve`)
///
/// Resolves the server settings, trains the dispatcher and runs the server
/// until shutdown. Training failures abort startup.
pub async fn handle_serve(args: ServeArgs, config: &Config) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let server_config = config::ServerConfig::resolve(&args, config);
    info!("Effective server config: {:?}", server_config);

    let dispatcher = Arc::new(Dispatcher::builtin(config.training.duplicate_responses)?);
    info!("Serving intents: {:?}", dispatcher.intents());
    server_logic::run_server(server_config, dispatcher).await
}
