//! Web shell for Jokebox
//!
//! An axum application with three routes: `GET /` renders the session's
//! joke history and the live category list, `POST /get_joke` fetches one
//! joke into the session, and `POST /clear_jokes` empties the history.
//! Session state is held server-side and addressed by a signed cookie; see
//! [`session`] for the store and cookie codec.

pub mod handlers;
pub mod session;

pub use handlers::router;
pub use session::{CookieCodec, SessionState, SessionStore, COOKIE_NAME};

use crate::api::JokeClient;
use crate::error::Result;

/// Shared state for the web shell handlers
#[derive(Clone)]
pub struct AppState {
    /// Joke API client shared by all handlers
    pub client: JokeClient,
    /// Per-session joke history
    pub sessions: SessionStore,
    /// Session cookie signer
    pub cookies: CookieCodec,
}

impl AppState {
    /// Build the shared state from a client and the session secret
    ///
    /// # Errors
    ///
    /// Returns an error when the session secret is empty.
    pub fn new(client: JokeClient, session_secret: &str) -> Result<Self> {
        Ok(Self {
            client,
            sessions: SessionStore::new(),
            cookies: CookieCodec::new(session_secret)?,
        })
    }
}
