//! # Bloombot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! This file is the entry point of the Bloombot CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up logging based on verbosity flags
//! - Loading configuration once for every command
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - `intent`: the trained classifier and the reply dispatcher
//! - `chat`: per-user transcripts
//! - `core`: configuration, errors and page templating
//! - `commands`: `serve`, `chat` and `classify`
//!
//! ## Examples
//!
//! ```bash
//! # Open the chat page at http://127.0.0.1:8501
//! bloombot serve
//!
//! # Chat in the terminal with debug logging
//! bloombot -vv chat
//!
//! # Classify a single message
//! bloombot classify i feel happy
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod chat;
mod commands;
mod core;
mod intent;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "bloombot",
    about = "🌸 Bloombot: a tiny intent-classifying chatbot",
    long_about = "Trains a small TF-IDF + Naive Bayes intent classifier at startup and answers\n\
                  each message with the canned reply for its intent, in a web page or a terminal.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the project `.bloombot.toml`.
    #[arg(long, global = true, env = "BLOOMBOT_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Serve the chat page over HTTP.
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    /// Chat in the terminal.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Classify one message and print its intent and reply.
    Classify(commands::classify::ClassifyArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match crate::core::config::load_config(cli.config.as_deref()) {
        Ok(config) => match cli.command {
            Commands::Serve(args) => commands::serve::handle_serve(args, &config).await,
            Commands::Chat(args) => commands::chat::handle_chat(args, &config).await,
            Commands::Classify(args) => commands::classify::handle_classify(args, &config).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
