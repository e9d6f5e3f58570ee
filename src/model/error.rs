//! Error types for the flickr-carousel application.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?`
//! and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all fatal failures
//!   - [`ClientError`] - Photo API failures (transport, HTTP status, API-level, decode)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Photo API errors are **non-fatal** once the UI is running: the search flow logs
//! them and degrades to an empty carousel. They only reach [`AppError`] when the
//! HTTP client itself cannot be constructed at startup.

use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or TUI rendering error.
    ///
    /// Raised by the crossterm/ratatui layer (raw mode, alternate screen, draw).
    /// Fatal: the terminal is restored and the process exits.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Photo API client could not be constructed.
    #[error("Photo client error: {0}")]
    Client(#[from] ClientError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),
}

/// Errors returned by a [`PhotoSearchClient`](crate::client::PhotoSearchClient).
///
/// Every variant is absorbed by the search flow; none of them is ever shown to
/// the user. They exist so the log records what actually went wrong.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Response body, for the log.
        body: String,
    },

    /// The API answered `stat: "fail"` (bad key, unknown photo, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use flickr_carousel::model::ClientError;
    ///
    /// let err = ClientError::Api { code: 100, message: "Invalid API Key".to_string() };
    /// assert_eq!(err.to_string(), "API error 100: Invalid API Key");
    /// ```
    #[error("API error {code}: {message}")]
    Api {
        /// API error code.
        code: i64,
        /// API error message.
        message: String,
    },

    /// Response body was not the JSON shape we expect.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
