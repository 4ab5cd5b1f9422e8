//! # Bloombot Web Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! Combines the `[server]` and `[page]` sections of the loaded configuration
//! with the `serve` command-line flags. Flags win over file values whenever
//! they are given:
//! 1. Command-line arguments (highest priority)
//! 2. Loaded configuration files (see `core::config`)
//! 3. Default values (lowest priority)
//!
//! ```bash
//! bloombot serve --port 9000 --host 0.0.0.0 --no-cors
//! ```
//!
use crate::core::config::{Config, PageConfig};
use clap::Parser;
use std::net::IpAddr;
use std::time::Duration;

/// # Serve Command Arguments (`ServeArgs`)
///
/// Command-line arguments accepted by `bloombot serve`. Unset options fall
/// back to the configuration file, then to the defaults.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Port to listen on (default 8501). The next free port is used if it is taken.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Address to bind (default 127.0.0.1). Use 0.0.0.0 to accept remote connections.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Do not send CORS headers.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Server Configuration (`ServerConfig`)
///
/// The settings the server logic runs with, after merging flags and files.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    /// Most browser transcripts held at once.
    pub max_sessions: u64,
    /// How long an untouched transcript is kept.
    pub session_idle: Duration,
    pub page: PageConfig,
}

impl ServerConfig {
    pub fn resolve(args: &ServeArgs, config: &Config) -> Self {
        Self {
            host: args.host.unwrap_or(config.server.host),
            port: args.port.unwrap_or(config.server.port),
            enable_cors: config.server.enable_cors && !args.no_cors,
            max_sessions: config.server.max_sessions,
            session_idle: Duration::from_secs(config.server.session_idle_minutes.saturating_mul(60)),
            page: config.page.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ServerSection;
    use std::net::Ipv4Addr;

    /// Test resolving with no flags and a default config.
    #[test]
    fn test_defaults_without_flags() {
        let resolved = ServerConfig::resolve(&ServeArgs::default(), &Config::default());
        assert_eq!(resolved.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(resolved.port, 8501);
        assert!(resolved.enable_cors);
        assert_eq!(resolved.max_sessions, 10_000);
        assert_eq!(resolved.session_idle, Duration::from_secs(30 * 60));
        assert_eq!(resolved.page, PageConfig::default());
    }

    /// Test that command-line flags win over file values.
    #[test]
    fn test_flags_override_file_values() {
        let config = Config {
            server: ServerSection {
                port: 7000,
                host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
                enable_cors: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let args = ServeArgs::try_parse_from(["serve", "--port", "9000", "--no-cors"]).unwrap();

        let resolved = ServerConfig::resolve(&args, &config);
        assert_eq!(resolved.port, 9000);
        assert_eq!(resolved.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED)); // From file
        assert!(!resolved.enable_cors);
    }

    #[test]
    fn test_file_can_disable_cors() {
        let config = Config {
            server: ServerSection {
                enable_cors: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = ServerConfig::resolve(&ServeArgs::default(), &config);
        assert!(!resolved.enable_cors);
    }

    /// Test that a non-IP `--host` is rejected by clap.
    #[test]
    fn test_rejects_bad_host() {
        assert!(ServeArgs::try_parse_from(["serve", "--host", "not-an-ip"]).is_err());
    }
}
