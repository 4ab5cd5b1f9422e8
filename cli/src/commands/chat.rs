//! # Bloombot Terminal Chat
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! `bloombot chat` is the terminal counterpart of the web page: it reads one
//! message per line from stdin, records the exchange in a `ChatSession` owned
//! by this command and prints both entries.
//!
//! - `/clear` empties the transcript
//! - `/history` prints the whole transcript
//! - `/quit` (or end of input) exits
//!
//! Blank lines are ignored and print nothing.
//!
use crate::chat::{ChatSession, Clock, SystemClock};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::intent::Dispatcher;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Print the intent chosen for each message.
    #[arg(long)]
    pub explain: bool,
}

pub async fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let dispatcher = Dispatcher::builtin(config.training.duplicate_responses)?;

    println!("{}", config.page.title);
    println!("{}", config.page.intro);
    println!("(type /clear to reset the chat, /quit to leave)\n");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_chat(stdin, &mut stdout, &dispatcher, &SystemClock, args.explain).await?;
    Ok(())
}

/// Drives one chat session from `input` until `/quit` or end of input.
/// Returns the session so callers can inspect the final transcript.
pub async fn run_chat<R, W>(
    input: R,
    out: &mut W,
    dispatcher: &Dispatcher,
    clock: &dyn Clock,
    explain: bool,
) -> Result<ChatSession>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = ChatSession::new();
    let mut lines = input.lines();

    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from standard input")?
    {
        match line.trim() {
            "/quit" => break,
            "/clear" => {
                session.clear_all();
                writeln!(out, "(chat cleared)")?;
            }
            "/history" => {
                for entry in session.entries() {
                    writeln!(out, "{}", entry)?;
                }
            }
            text => {
                let Some(exchange) = session.submit(dispatcher, text, clock) else {
                    continue;
                };
                writeln!(out, "{}", exchange.user)?;
                if explain {
                    writeln!(out, "  [intent: {}]", exchange.intent)?;
                }
                writeln!(out, "{}", exchange.bot)?;
            }
        }
        out.flush()?;
    }

    debug!("Chat ended with {} transcript entries", session.len());
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::transcript::FixedClock;
    use crate::chat::Sender;
    use crate::intent::DuplicatePolicy;

    async fn run(script: &str, explain: bool) -> (ChatSession, String) {
        let dispatcher = Dispatcher::builtin(DuplicatePolicy::KeepFirst).unwrap();
        let clock = FixedClock("21:15".into());
        let mut out = Vec::new();
        let session = run_chat(script.as_bytes(), &mut out, &dispatcher, &clock, explain)
            .await
            .unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    /// Test that each line prints the bot reply.
    #[tokio::test]
    async fn test_prints_each_exchange() {
        let (session, output) = run("hi\nthank you\n", false).await;
        assert_eq!(session.len(), 4);
        assert_eq!(
            output,
            "You (21:15): hi\n\
             Bot (21:15): Hello! How are you feeling today? 😊\n\
             You (21:15): thank you\n\
             Bot (21:15): You are welcome! I am always here to help. 🌸\n"
        );
    }

    #[tokio::test]
    async fn test_blank_lines_are_ignored() {
        let (session, output) = run("\n   \n\t\n", false).await;
        assert!(session.is_empty());
        assert!(output.is_empty());
    }

    /// Test the `/clear` and `/quit` commands.
    #[tokio::test]
    async fn test_clear_and_quit() {
        let (session, output) = run("hi\n/clear\nbye\n/quit\nthank you\n", false).await;
        assert_eq!(session.len(), 2);
        assert_eq!(session.entries()[0].sender, Sender::User);
        assert_eq!(session.entries()[0].message, "bye");
        assert!(output.contains("(chat cleared)"));
        assert!(!output.contains("thank you"));
    }

    /// Test `/history` and the `--explain` intent suffix.
    #[tokio::test]
    async fn test_history_and_explain() {
        let (_, output) = run("i feel sad\n/history\n", true).await;
        assert!(output.contains("  [intent: sad]"));
        let history: Vec<&str> = output.lines().skip(3).collect();
        assert_eq!(
            history,
            vec![
                "You (21:15): i feel sad",
                "Bot (21:15): I am sorry you are feeling sad. Want to talk about it?",
            ]
        );
    }
}
