//! Configuration management for Jokebox
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.
//!
//! Precedence, lowest to highest: built-in defaults, the optional YAML
//! config file, `JOKEBOX_*` environment variables, CLI flags.

use crate::cli::{Cli, Commands};
use crate::error::{JokeboxError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use url::Url;

/// Main configuration structure for Jokebox
///
/// Holds everything the three shells need: the joke API endpoint, the web
/// shell's bind address and session secret, and the notifier's cadence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote joke API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Web shell settings
    #[serde(default)]
    pub web: WebConfig,

    /// Desktop notifier settings
    #[serde(default)]
    pub notifier: NotifierConfig,
}

/// Remote joke API configuration
///
/// The base address was a hard-coded constant in earlier iterations of this
/// tool; it is now injected here and resolved once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the joke API
    #[serde(default = "default_api_base")]
    pub base_url: String,

    /// Read timeout per request, in seconds
    #[serde(default = "default_api_timeout")]
    pub timeout_seconds: u64,
}

fn default_api_base() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_api_timeout() -> u64 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base(),
            timeout_seconds: default_api_timeout(),
        }
    }
}

/// Web shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Address the web shell listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Secret used to sign session cookies
    ///
    /// There is no built-in fallback value; `jokebox serve` refuses to start
    /// until one is supplied via config file, `JOKEBOX_SESSION_SECRET`, or
    /// `--session-secret`.
    #[serde(default)]
    pub session_secret: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            session_secret: String::new(),
        }
    }
}

/// Desktop notifier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Seconds between notifications
    #[serde(default = "default_notify_interval")]
    pub interval_seconds: u64,

    /// Category to fetch jokes for
    ///
    /// When unset, one is picked at random from the live category list at
    /// startup; when that list is unavailable, jokes are fetched unfiltered.
    #[serde(default)]
    pub category: Option<String>,
}

fn default_notify_interval() -> u64 {
    1800
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_notify_interval(),
            category: None,
        }
    }
}

impl Config {
    /// Load configuration from a file with environment and CLI overrides
    ///
    /// A missing config file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &str, cli: &Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&contents).map_err(JokeboxError::Yaml)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", path);
            Self::default()
        };

        config.apply_env_overrides();
        config.apply_cli_overrides(cli);
        Ok(config)
    }

    /// Apply `JOKEBOX_*` environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("JOKEBOX_API_BASE") {
            self.api.base_url = base_url;
        }
        if let Ok(timeout) = std::env::var("JOKEBOX_API_TIMEOUT_SECONDS") {
            if let Ok(parsed) = timeout.parse() {
                self.api.timeout_seconds = parsed;
            } else {
                tracing::warn!("Ignoring unparsable JOKEBOX_API_TIMEOUT_SECONDS: {}", timeout);
            }
        }
        if let Ok(bind_addr) = std::env::var("JOKEBOX_BIND_ADDR") {
            self.web.bind_addr = bind_addr;
        }
        if let Ok(secret) = std::env::var("JOKEBOX_SESSION_SECRET") {
            self.web.session_secret = secret;
        }
        if let Ok(interval) = std::env::var("JOKEBOX_NOTIFY_INTERVAL_SECONDS") {
            if let Ok(parsed) = interval.parse() {
                self.notifier.interval_seconds = parsed;
            } else {
                tracing::warn!(
                    "Ignoring unparsable JOKEBOX_NOTIFY_INTERVAL_SECONDS: {}",
                    interval
                );
            }
        }
        if let Ok(category) = std::env::var("JOKEBOX_NOTIFY_CATEGORY") {
            self.notifier.category = Some(category);
        }
    }

    /// Apply command-line overrides, which take precedence over everything
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(base_url) = &cli.api_base {
            self.api.base_url = base_url.clone();
        }
        match &cli.command {
            Commands::Serve {
                bind,
                session_secret,
            } => {
                if let Some(bind) = bind {
                    self.web.bind_addr = bind.clone();
                }
                if let Some(secret) = session_secret {
                    self.web.session_secret = secret.clone();
                }
            }
            Commands::Notify {
                interval_seconds,
                category,
                ..
            } => {
                if let Some(interval) = interval_seconds {
                    self.notifier.interval_seconds = *interval;
                }
                if let Some(category) = category {
                    self.notifier.category = Some(category.clone());
                }
            }
            Commands::Menu => {}
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the API base URL is not an absolute URL, the
    /// web bind address is not a socket address, or a timeout/interval is
    /// zero.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api.base_url).map_err(|e| {
            JokeboxError::Config(format!("invalid API base URL '{}': {}", self.api.base_url, e))
        })?;
        if self.api.timeout_seconds == 0 {
            return Err(JokeboxError::Config(
                "api.timeout_seconds must be greater than zero".to_string(),
            )
            .into());
        }
        self.web.bind_addr.parse::<SocketAddr>().map_err(|e| {
            JokeboxError::Config(format!(
                "invalid web bind address '{}': {}",
                self.web.bind_addr, e
            ))
        })?;
        if self.notifier.interval_seconds == 0 {
            return Err(JokeboxError::Config(
                "notifier.interval_seconds must be greater than zero".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
