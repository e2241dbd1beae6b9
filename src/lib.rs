//! Jokebox - thin front-ends over a remote joke API
//!
//! This library provides the shared core behind the `jokebox` binary's three
//! shells: an interactive terminal menu, a browser-facing web page with
//! per-session joke history, and a periodic desktop notifier.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `api`: The `JokeClient` wrapper over the remote joke API
//! - `commands`: Handlers for the `menu`, `serve`, and `notify` subcommands
//! - `web`: Axum router, handlers, and the per-session history store
//! - `notify`: Notification sink trait and implementations
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use jokebox::api::JokeClient;
//! use jokebox::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     let client = JokeClient::new(&config.api)?;
//!     let categories = client.joke_types().await;
//!     println!("{} categories available", categories.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod notify;
pub mod web;

// Re-export commonly used types
pub use api::{Joke, JokeClient, ANY_CATEGORY};
pub use config::Config;
pub use error::{JokeboxError, Result};
