//! # Bloombot Classify Command
//!
//! File: cli/src/commands/classify.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! `bloombot classify <TEXT>...` runs one message through the intent
//! pipeline and prints the chosen intent and reply. With `--explain` it also
//! prints the score of every intent, best first.
//!
//! ```bash
//! $ bloombot classify thank you
//! intent: thanks
//! reply: You are welcome! I am always here to help. 🌸
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::intent::Dispatcher;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// The message to classify. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Also print the score of every intent.
    #[arg(long)]
    pub explain: bool,
}

pub async fn handle_classify(args: ClassifyArgs, config: &Config) -> Result<()> {
    let dispatcher = Dispatcher::builtin(config.training.duplicate_responses)?;
    let text = args.text.join(" ");
    let stdout = std::io::stdout();
    write_classification(&mut stdout.lock(), &dispatcher, &text, args.explain)
}

fn write_classification(
    out: &mut impl Write,
    dispatcher: &Dispatcher,
    text: &str,
    explain: bool,
) -> Result<()> {
    let Some(classification) = dispatcher.explain(text) else {
        writeln!(out, "(no input)")?;
        return Ok(());
    };

    writeln!(out, "intent: {}", classification.intent)?;
    writeln!(out, "reply: {}", dispatcher.reply_for(&classification.intent))?;

    if explain {
        let mut scores = classification.scores;
        scores.sort_by(|a, b| b.1.total_cmp(&a.1));
        writeln!(out, "scores:")?;
        for (intent, score) in scores {
            writeln!(out, "  {:<10} {:>9.4}", intent, score)?;
        }
    }
    Ok(())
}
