//! Error types for Jokebox
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.
//!
//! Note that failures while talking to the joke API are deliberately *not*
//! part of this taxonomy: [`crate::api::JokeClient`] normalizes every
//! transport fault and non-success response into an empty list or `None`
//! instead of an error. The variants here cover everything around that
//! core: configuration, startup, and the shells themselves.

use thiserror::Error;

/// Main error type for Jokebox operations
#[derive(Error, Debug)]
pub enum JokeboxError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Joke API client construction errors
    #[error("API client error: {0}")]
    Api(String),

    /// Web shell errors (bind failures, session store setup)
    #[error("Web shell error: {0}")]
    Web(String),

    /// Notification delivery errors
    #[error("Notification error: {0}")]
    Notify(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Jokebox operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = JokeboxError::Config("invalid base URL".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid base URL");
    }

    #[test]
    fn test_api_error_display() {
        let error = JokeboxError::Api("client build failed".to_string());
        assert_eq!(error.to_string(), "API client error: client build failed");
    }

    #[test]
    fn test_web_error_display() {
        let error = JokeboxError::Web("empty session secret".to_string());
        assert_eq!(error.to_string(), "Web shell error: empty session secret");
    }

    #[test]
    fn test_notify_error_display() {
        let error = JokeboxError::Notify("notify-send exited with status 1".to_string());
        assert_eq!(
            error.to_string(),
            "Notification error: notify-send exited with status 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: JokeboxError = io_error.into();
        assert!(matches!(error, JokeboxError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let error: JokeboxError = json_error.into();
        assert!(matches!(error, JokeboxError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: : yaml").unwrap_err();
        let error: JokeboxError = yaml_error.into();
        assert!(matches!(error, JokeboxError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JokeboxError>();
    }
}
