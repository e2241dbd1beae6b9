//! Joke API client for Jokebox
//!
//! This module wraps the two remote endpoints every shell consumes:
//! `GET /jokes/types` and `GET /jokes/random[?keyword=]`.
//!
//! The client never surfaces an error to its callers. Any transport fault,
//! non-success status, or malformed body collapses to the same "no data"
//! result: an empty category list or an absent joke. Callers treat absence
//! as "show a retry message" and nothing more. The fault itself is logged
//! at `warn` so operators still see what happened.

use crate::config::ApiConfig;
use crate::error::{JokeboxError, Result};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Sentinel category meaning "no filter"
pub const ANY_CATEGORY: &str = "Any";

/// A joke as returned by the remote API
///
/// Immutable once received; the client never builds one locally, so a
/// `Joke` in hand is always a verbatim API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    /// Category label the API filed this joke under
    #[serde(rename = "type")]
    pub joke_type: String,
    /// Leading line
    pub setup: String,
    /// Closing line
    pub punchline: String,
}

/// Joke API client
///
/// Stateless between calls; each operation is an independent, idempotent
/// read with no retries and no caching. Cloning is cheap and clones share
/// the underlying connection pool.
///
/// # Examples
///
/// ```no_run
/// use jokebox::api::JokeClient;
/// use jokebox::config::ApiConfig;
///
/// # async fn example() -> jokebox::error::Result<()> {
/// let client = JokeClient::new(&ApiConfig::default())?;
/// let types = client.joke_types().await;
/// let joke = client.random_joke(types.first().map(String::as_str)).await;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct JokeClient {
    http: Client,
    base_url: String,
}

impl JokeClient {
    /// Create a new joke API client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute URL or HTTP
    /// client initialization fails.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            JokeboxError::Config(format!("invalid API base URL '{}': {}", config.base_url, e))
        })?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("jokebox/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| JokeboxError::Api(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!("Initialized joke API client: base={}", base);

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the list of joke categories
    ///
    /// Returns the API's array exactly as received: order preserved, no
    /// deduplication, no case transformation. Returns an empty list on any
    /// failure.
    pub async fn joke_types(&self) -> Vec<String> {
        let url = format!("{}/jokes/types", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<Vec<String>>().await {
                    Ok(types) => {
                        tracing::debug!("Fetched {} joke types", types.len());
                        types
                    }
                    Err(err) => {
                        tracing::warn!("Malformed joke types response: {}", err);
                        Vec::new()
                    }
                }
            }
            Ok(response) => {
                tracing::warn!("Joke types request rejected: status {}", response.status());
                Vec::new()
            }
            Err(err) => {
                tracing::warn!("Joke types request failed: {}", err);
                Vec::new()
            }
        }
    }

    /// Fetch one random joke, optionally filtered by category
    ///
    /// The category is forwarded to the API as-is; nothing is validated
    /// locally, and the `Any` sentinel (or an empty string) means no
    /// filter. Returns `None` on any failure, never a partial joke.
    pub async fn random_joke(&self, category: Option<&str>) -> Option<Joke> {
        let url = format!("{}/jokes/random", self.base_url);
        let mut request = self.http.get(&url);
        if let Some(keyword) = keyword_filter(category) {
            request = request.query(&[("keyword", keyword)]);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<Joke>().await {
                    Ok(joke) => {
                        tracing::debug!("Fetched a {} joke", joke.joke_type);
                        Some(joke)
                    }
                    Err(err) => {
                        tracing::warn!("Malformed joke response: {}", err);
                        None
                    }
                }
            }
            Ok(response) => {
                tracing::warn!("Joke request rejected: status {}", response.status());
                None
            }
            Err(err) => {
                tracing::warn!("Joke request failed: {}", err);
                None
            }
        }
    }
}

/// Reduce an optional category to the keyword actually sent to the API
///
/// The `Any` sentinel is matched case-insensitively so the menu and web
/// shells cannot disagree on its casing.
pub(crate) fn keyword_filter(category: Option<&str>) -> Option<&str> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ANY_CATEGORY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_filter_passes_real_category() {
        assert_eq!(keyword_filter(Some("programming")), Some("programming"));
    }

    #[test]
    fn test_keyword_filter_drops_any_sentinel() {
        assert_eq!(keyword_filter(Some("Any")), None);
        assert_eq!(keyword_filter(Some("any")), None);
        assert_eq!(keyword_filter(Some("ANY")), None);
    }

    #[test]
    fn test_keyword_filter_drops_blank() {
        assert_eq!(keyword_filter(Some("")), None);
        assert_eq!(keyword_filter(Some("   ")), None);
        assert_eq!(keyword_filter(None), None);
    }

    #[test]
    fn test_keyword_filter_trims() {
        assert_eq!(keyword_filter(Some(" general ")), Some("general"));
    }

    #[test]
    fn test_joke_deserializes_wire_format() {
        let joke: Joke = serde_json::from_str(
            r#"{"type":"general","setup":"Why?","punchline":"Because.","id":7}"#,
        )
        .unwrap();
        assert_eq!(joke.joke_type, "general");
        assert_eq!(joke.setup, "Why?");
        assert_eq!(joke.punchline, "Because.");
    }

    #[test]
    fn test_new_rejects_relative_base_url() {
        let config = ApiConfig {
            base_url: "jokes.internal".to_string(),
            timeout_seconds: 5,
        };
        assert!(JokeClient::new(&config).is_err());
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:8000/".to_string(),
            timeout_seconds: 5,
        };
        let client = JokeClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:8000");
    }
}
