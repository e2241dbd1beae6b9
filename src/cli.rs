//! Command-line interface definition for Jokebox
//!
//! This module defines the CLI structure using clap's derive API,
//! providing the three front-end subcommands: `menu`, `serve`, and `notify`.

use clap::{Parser, Subcommand};

/// Jokebox - joke API front-ends
///
/// Fetch joke categories and random jokes from a joke API and present them
/// through a terminal menu, a web page, or periodic desktop notifications.
#[derive(Parser, Debug, Clone)]
#[command(name = "jokebox")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the joke API base URL from config
    #[arg(long)]
    pub api_base: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Jokebox
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Pick joke categories from an interactive terminal menu
    Menu,

    /// Serve the web shell with per-session joke history
    Serve {
        /// Address to listen on (host:port)
        #[arg(short, long)]
        bind: Option<String>,

        /// Secret used to sign session cookies
        #[arg(long)]
        session_secret: Option<String>,
    },

    /// Deliver a joke as a desktop notification on a fixed interval
    Notify {
        /// Seconds between notifications
        #[arg(long)]
        interval_seconds: Option<u64>,

        /// Category to fetch jokes for (picked at random when omitted)
        #[arg(long)]
        category: Option<String>,

        /// Print notifications to the terminal instead of the desktop
        #[arg(long)]
        console: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            api_base: None,
            command: Commands::Menu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default() {
        let cli = Cli::default();
        assert_eq!(cli.config, Some("config/config.yaml".to_string()));
        assert!(!cli.verbose);
        assert!(cli.api_base.is_none());
        assert!(matches!(cli.command, Commands::Menu));
    }

    #[test]
    fn test_cli_parse_menu() {
        let cli = Cli::try_parse_from(["jokebox", "menu"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Menu));
    }

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::try_parse_from(["jokebox", "serve"]);
        assert!(cli.is_ok());
        if let Commands::Serve {
            bind,
            session_secret,
        } = cli.unwrap().command
        {
            assert_eq!(bind, None);
            assert_eq!(session_secret, None);
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_cli_parse_serve_with_bind() {
        let cli = Cli::try_parse_from(["jokebox", "serve", "--bind", "0.0.0.0:8080"]);
        assert!(cli.is_ok());
        if let Commands::Serve { bind, .. } = cli.unwrap().command {
            assert_eq!(bind, Some("0.0.0.0:8080".to_string()));
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_cli_parse_serve_with_session_secret() {
        let cli = Cli::try_parse_from(["jokebox", "serve", "--session-secret", "hunter2"]);
        assert!(cli.is_ok());
        if let Commands::Serve { session_secret, .. } = cli.unwrap().command {
            assert_eq!(session_secret, Some("hunter2".to_string()));
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_cli_parse_notify_defaults() {
        let cli = Cli::try_parse_from(["jokebox", "notify"]);
        assert!(cli.is_ok());
        if let Commands::Notify {
            interval_seconds,
            category,
            console,
        } = cli.unwrap().command
        {
            assert_eq!(interval_seconds, None);
            assert_eq!(category, None);
            assert!(!console);
        } else {
            panic!("Expected Notify command");
        }
    }

    #[test]
    fn test_cli_parse_notify_with_flags() {
        let cli = Cli::try_parse_from([
            "jokebox",
            "notify",
            "--interval-seconds",
            "60",
            "--category",
            "programming",
            "--console",
        ]);
        assert!(cli.is_ok());
        if let Commands::Notify {
            interval_seconds,
            category,
            console,
        } = cli.unwrap().command
        {
            assert_eq!(interval_seconds, Some(60));
            assert_eq!(category, Some("programming".to_string()));
            assert!(console);
        } else {
            panic!("Expected Notify command");
        }
    }

    #[test]
    fn test_cli_parse_notify_rejects_bad_interval() {
        let cli = Cli::try_parse_from(["jokebox", "notify", "--interval-seconds", "soon"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_with_api_base() {
        let cli = Cli::try_parse_from(["jokebox", "--api-base", "http://localhost:9000", "menu"]);
        assert!(cli.is_ok());
        assert_eq!(
            cli.unwrap().api_base,
            Some("http://localhost:9000".to_string())
        );
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::try_parse_from(["jokebox", "--config", "custom.yaml", "menu"]);
        assert!(cli.is_ok());
        assert_eq!(cli.unwrap().config, Some("custom.yaml".to_string()));
    }

    #[test]
    fn test_cli_parse_with_verbose() {
        let cli = Cli::try_parse_from(["jokebox", "-v", "menu"]);
        assert!(cli.is_ok());
        assert!(cli.unwrap().verbose);
    }

    #[test]
    fn test_cli_parse_missing_command() {
        let cli = Cli::try_parse_from(["jokebox"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_invalid_command() {
        let cli = Cli::try_parse_from(["jokebox", "invalid"]);
        assert!(cli.is_err());
    }
}
