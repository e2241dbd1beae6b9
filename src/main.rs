//! Jokebox - joke API front-ends
//!
//! Main entry point: parses the CLI, loads configuration, and dispatches
//! to the selected front-end.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jokebox::cli::{Cli, Commands};
use jokebox::commands;
use jokebox::config::Config;
use jokebox::notify::{ConsoleSink, DesktopSink, NotifySink};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load and validate configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Menu => {
            tracing::info!("Starting interactive menu");
            commands::menu::run_menu(config).await?;
            Ok(())
        }
        Commands::Serve { .. } => {
            tracing::info!("Starting web shell");
            commands::serve::run_server(config).await?;
            Ok(())
        }
        Commands::Notify { console, .. } => {
            tracing::info!(
                "Starting notifier: one joke every {} seconds",
                config.notifier.interval_seconds
            );
            let sink: Box<dyn NotifySink> = if console {
                Box::new(ConsoleSink)
            } else {
                Box::new(DesktopSink)
            };
            commands::notify::run_notifier(config, sink.as_ref()).await?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "jokebox=debug" } else { "jokebox=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
