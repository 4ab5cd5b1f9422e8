//! # Bloombot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! This module loads, merges and validates Bloombot's configuration. Every
//! setting has a built-in default, so running without any file is the normal
//! case.
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by the individual commands)
//! 2. The file named by `--config` / `BLOOMBOT_CONFIG`, or else a project
//!    `.bloombot.toml` in the current directory or its ancestors (the search
//!    stops at the first directory containing `.git`)
//! 3. User `config.toml` in the platform config directory
//!    (e.g. `~/.config/bloombot/config.toml`)
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 9000
//! enable_cors = false
//!
//! [page]
//! title = "🌸 Universal AI Chatbot"
//! intro = "Hello! I am your friendly AI chatbot."
//!
//! [training]
//! duplicate_responses = "reject"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(cli.config.as_deref())?;
//! let dispatcher = Dispatcher::builtin(cfg.training.duplicate_responses)?;
//! ```
//!
use crate::core::error::{BloombotError, Result};
use crate::intent::DuplicatePolicy;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".bloombot.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub training: TrainingConfig,
}

/// Network settings for `bloombot serve`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Send permissive CORS headers (useful for calling `/api/reply` from other origins).
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
    /// Most browser transcripts held in memory at once.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    /// Minutes a transcript may sit untouched before it is dropped.
    #[serde(default = "default_session_idle_minutes")]
    pub session_idle_minutes: u64,
}

/// Text shown on the chat page.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_intro")]
    pub intro: String,
}

/// Settings that affect how the intent pipeline is built at startup.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TrainingConfig {
    /// What to do when one intent is listed with different responses.
    #[serde(default)]
    pub duplicate_responses: DuplicatePolicy,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}
fn default_port() -> u16 {
    8501
}
fn default_enable_cors() -> bool {
    true
}
fn default_max_sessions() -> u64 {
    10_000
}
fn default_session_idle_minutes() -> u64 {
    30
}
fn default_title() -> String {
    "🌸 Universal AI Chatbot".to_string()
}
fn default_intro() -> String {
    "Hello! I am your friendly AI chatbot. You can ask me anything, and I am here to listen. 😊"
        .to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
            max_sessions: default_max_sessions(),
            session_idle_minutes: default_session_idle_minutes(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            intro: default_intro(),
        }
    }
}

/// Loads the effective configuration.
///
/// `explicit` is the path given with `--config`; when present it replaces the
/// project file search and must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = match explicit {
        Some(path) => Some(load_explicit_config(path)?),
        None => {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            load_project_config(&current_dir)?
        }
    };
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Bloombot", "bloombot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_explicit_config(path: &Path) -> Result<Config> {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
    if !expanded.is_file() {
        return Err(anyhow!(BloombotError::Config(format!(
            "Configuration file '{}' does not exist or is not a file.",
            expanded.display()
        ))));
    }
    info!("Loading configuration from: {}", expanded.display());
    load_config_from_path(&expanded)
}

fn load_project_config(start_dir: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in {} or its ancestors.",
            PROJECT_CONFIG_FILENAME,
            start_dir.display()
        );
        Ok(None)
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = user;

    if project_cfg.server.host != defaults.server.host {
        merged.server.host = project_cfg.server.host;
    }
    if project_cfg.server.port != defaults.server.port {
        merged.server.port = project_cfg.server.port;
    }
    if project_cfg.server.enable_cors != defaults.server.enable_cors {
        merged.server.enable_cors = project_cfg.server.enable_cors;
    }
    if project_cfg.server.max_sessions != defaults.server.max_sessions {
        merged.server.max_sessions = project_cfg.server.max_sessions;
    }
    if project_cfg.server.session_idle_minutes != defaults.server.session_idle_minutes {
        merged.server.session_idle_minutes = project_cfg.server.session_idle_minutes;
    }
    if project_cfg.page.title != defaults.page.title {
        merged.page.title = project_cfg.page.title;
    }
    if project_cfg.page.intro != defaults.page.intro {
        merged.page.intro = project_cfg.page.intro;
    }
    if project_cfg.training.duplicate_responses != defaults.training.duplicate_responses {
        merged.training.duplicate_responses = project_cfg.training.duplicate_responses;
    }
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.server.port == 0 {
        return Err(anyhow!(BloombotError::Config(
            "server.port must be between 1 and 65535.".to_string()
        )));
    }
    if config.server.max_sessions == 0 {
        return Err(anyhow!(BloombotError::Config(
            "server.max_sessions must be at least 1.".to_string()
        )));
    }
    if config.server.session_idle_minutes == 0 {
        return Err(anyhow!(BloombotError::Config(
            "server.session_idle_minutes must be at least 1.".to_string()
        )));
    }
    if config.page.title.trim().is_empty() {
        return Err(anyhow!(BloombotError::Config(
            "page.title must not be empty.".to_string()
        )));
    }
    Ok(())
}
