//! Per-session joke history and signed session cookies
//!
//! The browser holds nothing but a signed session id; all state lives
//! server-side in [`SessionStore`]. Cookie values are
//! `<uuid>.<base64 HMAC-SHA256 tag>`, signed with the configured secret.
//! A cookie whose tag does not verify is treated as absent, so a tampered
//! or forged cookie simply yields a fresh empty session.

use crate::api::{Joke, ANY_CATEGORY};
use crate::error::{JokeboxError, Result};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie
pub const COOKIE_NAME: &str = "jokebox_session";

/// State held for one browser session
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Jokes fetched during this session, oldest first
    pub jokes: Vec<Joke>,
    /// Category last requested through the form
    pub selected: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            jokes: Vec::new(),
            selected: ANY_CATEGORY.to_string(),
        }
    }
}

/// In-memory store of per-session state, keyed by session id
///
/// Lifetime is bounded by the process; there is deliberately no
/// persistence. Handlers run concurrently, hence the lock, but each
/// session is only ever touched by its own browser.
#[derive(Clone, Default)]
pub struct SessionStore {
    entries: Arc<RwLock<HashMap<Uuid, SessionState>>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the state for this session, or the default when unknown
    pub async fn snapshot(&self, id: Uuid) -> SessionState {
        self.entries
            .read()
            .await
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    /// Append a joke to this session's history
    pub async fn append(&self, id: Uuid, joke: Joke) {
        let mut entries = self.entries.write().await;
        entries.entry(id).or_default().jokes.push(joke);
    }

    /// Record the category last selected in this session
    pub async fn set_selected(&self, id: Uuid, category: String) {
        let mut entries = self.entries.write().await;
        entries.entry(id).or_default().selected = category;
    }

    /// Empty this session's joke history, keeping the selected category
    pub async fn clear(&self, id: Uuid) {
        let mut entries = self.entries.write().await;
        if let Some(state) = entries.get_mut(&id) {
            state.jokes.clear();
        }
    }
}

/// Signs and verifies session-id cookie values
#[derive(Clone)]
pub struct CookieCodec {
    secret: Arc<Vec<u8>>,
}

impl CookieCodec {
    /// Create a codec from the configured secret
    ///
    /// # Errors
    ///
    /// Returns an error when the secret is empty; there is no built-in
    /// fallback key.
    pub fn new(secret: &str) -> Result<Self> {
        if secret.is_empty() {
            return Err(JokeboxError::Web(
                "session secret is not configured; set JOKEBOX_SESSION_SECRET, \
                 web.session_secret, or --session-secret"
                    .to_string(),
            )
            .into());
        }
        Ok(Self {
            secret: Arc::new(secret.as_bytes().to_vec()),
        })
    }

    /// Encode a session id into a signed cookie value
    pub fn encode(&self, id: Uuid) -> String {
        format!("{}.{}", id, self.tag(id))
    }

    /// Decode a cookie value back into a session id
    ///
    /// Returns `None` for anything that is not a well-formed, correctly
    /// signed value.
    pub fn decode(&self, value: &str) -> Option<Uuid> {
        let (id_part, tag_part) = value.split_once('.')?;
        let id = Uuid::parse_str(id_part).ok()?;
        let tag = URL_SAFE_NO_PAD.decode(tag_part).ok()?;
        let mut mac = self.mac();
        mac.update(id_part.as_bytes());
        mac.verify_slice(&tag).ok()?;
        Some(id)
    }

    fn tag(&self, id: Uuid) -> String {
        let mut mac = self.mac();
        mac.update(id.to_string().as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts keys of any length")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joke(setup: &str) -> Joke {
        Joke {
            joke_type: "general".to_string(),
            setup: setup.to_string(),
            punchline: "punchline".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unknown_session_snapshots_to_default() {
        let store = SessionStore::new();
        let state = store.snapshot(Uuid::new_v4()).await;
        assert!(state.jokes.is_empty());
        assert_eq!(state.selected, ANY_CATEGORY);
    }

    #[tokio::test]
    async fn test_append_grows_history_in_order() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        store.append(id, joke("first")).await;
        store.append(id, joke("second")).await;
        let state = store.snapshot(id).await;
        assert_eq!(state.jokes.len(), 2);
        assert_eq!(state.jokes[0].setup, "first");
        assert_eq!(state.jokes[1].setup, "second");
    }

    #[tokio::test]
    async fn test_clear_empties_history_but_keeps_selection() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        store.append(id, joke("first")).await;
        store.set_selected(id, "programming".to_string()).await;
        store.clear(id).await;
        let state = store.snapshot(id).await;
        assert!(state.jokes.is_empty());
        assert_eq!(state.selected, "programming");
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_state() {
        let store = SessionStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store.append(a, joke("only in a")).await;
        assert_eq!(store.snapshot(a).await.jokes.len(), 1);
        assert!(store.snapshot(b).await.jokes.is_empty());
    }

    #[test]
    fn test_codec_rejects_empty_secret() {
        assert!(CookieCodec::new("").is_err());
    }

    #[test]
    fn test_cookie_round_trip() {
        let codec = CookieCodec::new("test-secret").unwrap();
        let id = Uuid::new_v4();
        let value = codec.encode(id);
        assert_eq!(codec.decode(&value), Some(id));
    }

    #[test]
    fn test_decode_rejects_tampered_id() {
        let codec = CookieCodec::new("test-secret").unwrap();
        let value = codec.encode(Uuid::new_v4());
        let other = Uuid::new_v4();
        let (_, tag) = value.split_once('.').unwrap();
        let forged = format!("{}.{}", other, tag);
        assert_eq!(codec.decode(&forged), None);
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let codec = CookieCodec::new("test-secret").unwrap();
        let other = CookieCodec::new("different-secret").unwrap();
        let value = codec.encode(Uuid::new_v4());
        assert_eq!(other.decode(&value), None);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let codec = CookieCodec::new("test-secret").unwrap();
        assert_eq!(codec.decode("not-a-cookie"), None);
        assert_eq!(codec.decode("not-a-uuid.dGFn"), None);
        assert_eq!(codec.decode(""), None);
    }
}
