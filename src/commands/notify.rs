//! Desktop notifier handler
//!
//! Fetches one joke per interval tick and hands its text to the
//! notification sink. A failed fetch or failed delivery is logged and the
//! cycle is skipped; the next tick proceeds as normal with no backoff.

use crate::api::JokeClient;
use crate::config::Config;
use crate::error::Result;
use crate::notify::NotifySink;

use rand::seq::IndexedRandom;
use std::time::Duration;

/// Title used for every notification
pub const NOTIFICATION_TITLE: &str = "Here's your Joke";

/// Run the notifier loop indefinitely
///
/// The category is resolved once at startup: the configured value when
/// present, otherwise a random pick from the live category list, otherwise
/// unfiltered. The first notification fires immediately.
///
/// # Errors
///
/// Returns an error only when the client cannot be constructed.
pub async fn run_notifier(config: Config, sink: &dyn NotifySink) -> Result<()> {
    let client = JokeClient::new(&config.api)?;
    let category = resolve_category(&client, config.notifier.category.clone()).await;

    match &category {
        Some(c) => tracing::info!("Notifier started: category '{}'", c),
        None => tracing::info!("Notifier started: no category filter"),
    }

    let mut ticker =
        tokio::time::interval(Duration::from_secs(config.notifier.interval_seconds));
    loop {
        ticker.tick().await;
        poll_once(&client, sink, category.as_deref()).await;
    }
}

/// Category the notifier will poll with
pub async fn resolve_category(client: &JokeClient, configured: Option<String>) -> Option<String> {
    if configured.is_some() {
        return configured;
    }
    let types = client.joke_types().await;
    types.choose(&mut rand::rng()).cloned()
}

/// One poll cycle: fetch a joke and deliver it
///
/// Returns whether a notification was delivered. Both failure modes are
/// logged here and do not propagate.
pub async fn poll_once(
    client: &JokeClient,
    sink: &dyn NotifySink,
    category: Option<&str>,
) -> bool {
    let Some(joke) = client.random_joke(category).await else {
        tracing::warn!("No joke available, skipping this cycle");
        return false;
    };

    let body = format!("{}\n{}", joke.setup, joke.punchline);
    match sink.notify(NOTIFICATION_TITLE, &body).await {
        Ok(()) => {
            tracing::debug!("Delivered a {} joke", joke.joke_type);
            true
        }
        Err(err) => {
            tracing::warn!("Notification delivery failed: {}", err);
            false
        }
    }
}
