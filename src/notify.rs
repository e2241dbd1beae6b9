//! Notification sinks for the `notify` subcommand
//!
//! Delivery is behind the [`NotifySink`] trait so the poller never cares
//! how a joke reaches the user. Two sinks ship with the crate: one that
//! shells out to `notify-send`, and one that prints to the terminal for
//! headless environments.

use crate::error::{JokeboxError, Result};

use async_trait::async_trait;
use colored::Colorize;

/// Destination for notification text
#[async_trait]
pub trait NotifySink: Send + Sync {
    /// Deliver one notification
    ///
    /// # Errors
    ///
    /// Returns an error when delivery fails; the poller logs the failure
    /// and carries on with the next cycle.
    async fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// Desktop notifications via the `notify-send` command
///
/// Spawning the system tool keeps the crate free of display-server
/// bindings; the command is present on any freedesktop-compliant desktop.
pub struct DesktopSink;

#[async_trait]
impl NotifySink for DesktopSink {
    async fn notify(&self, title: &str, body: &str) -> Result<()> {
        let status = tokio::process::Command::new("notify-send")
            .arg(title)
            .arg(body)
            .status()
            .await
            .map_err(|e| JokeboxError::Notify(format!("failed to run notify-send: {}", e)))?;

        if !status.success() {
            return Err(
                JokeboxError::Notify(format!("notify-send exited with {}", status)).into(),
            );
        }
        Ok(())
    }
}

/// Terminal fallback sink
pub struct ConsoleSink;

#[async_trait]
impl NotifySink for ConsoleSink {
    async fn notify(&self, title: &str, body: &str) -> Result<()> {
        println!("\n{}", title.bold());
        println!("{}", body);
        Ok(())
    }
}
