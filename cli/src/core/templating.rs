//! # Bloombot Page Templating
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! Renders the chat page served by `bloombot serve` with the Tera templating
//! engine. The template is embedded in the binary and registered once when the
//! server starts; each request renders it with the page text and the caller's
//! transcript.
//!
//! The template name ends in `.html`, so Tera's autoescaping applies to every
//! interpolated value, including user-typed messages.
//!
use crate::chat::ChatEntry;
use crate::core::config::PageConfig;
use crate::core::error::{BloombotError, Result};
use anyhow::anyhow;
use tera::{Context, Tera};
use tracing::debug;

const CHAT_TEMPLATE_NAME: &str = "chat.html";

const CHAT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ page.title }}</title>
  <style>
    body { font-family: sans-serif; max-width: 42rem; margin: 2rem auto; padding: 0 1rem; }
    .entry { margin: 0.4rem 0; }
    .entry.bot { color: #8a3b6b; }
    form { display: inline; }
    input[name=message] { width: 70%; }
  </style>
</head>
<body>
  <h1>{{ page.title }}</h1>
  <p>{{ page.intro }}</p>
  <div id="transcript">
  {%- for entry in entries %}
    <div class="entry {{ entry.sender }}"><strong>{% if entry.sender == "user" %}You{% else %}Bot{% endif %} ({{ entry.timestamp }}):</strong> {{ entry.message }}</div>
  {%- endfor %}
  </div>
  <form method="post" action="/clear"><button type="submit">Clear Chat</button></form>
  <form method="post" action="/send">
    <label for="message">You:</label>
    <input id="message" name="message" autocomplete="off" autofocus>
  </form>
</body>
</html>
"#;

/// Renders the chat page. Cheap to share behind an `Arc`.
#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(CHAT_TEMPLATE_NAME, CHAT_TEMPLATE)
            .map_err(|e| {
                anyhow!(BloombotError::Template { source: e })
                    .context("Failed to register the chat page template")
            })?;
        Ok(Self { tera })
    }

    pub fn render_chat(&self, page: &PageConfig, entries: &[ChatEntry]) -> Result<String> {
        let mut context = Context::new();
        context.insert("page", page);
        context.insert("entries", entries);
        debug!("Rendering chat page with {} entries", entries.len());
        self.tera.render(CHAT_TEMPLATE_NAME, &context).map_err(|e| {
            anyhow!(BloombotError::Template { source: e }).context("Tera rendering failed for the chat page")
        })
    }
}
