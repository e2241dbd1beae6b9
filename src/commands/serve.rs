//! Web shell handler
//!
//! Binds the configured address and serves the axum application from
//! [`crate::web`]. Runs until the process is stopped.

use crate::api::JokeClient;
use crate::config::Config;
use crate::error::Result;
use crate::web::{router, AppState};

/// Start the web shell
///
/// # Errors
///
/// Returns an error when the session secret is missing, the client cannot
/// be constructed, or the listener cannot bind.
pub async fn run_server(config: Config) -> Result<()> {
    let client = JokeClient::new(&config.api)?;
    let state = AppState::new(client, &config.web.session_secret)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.web.bind_addr).await?;
    tracing::info!("Web shell listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
