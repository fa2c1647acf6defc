//! Error types for the event relay.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling an event submission.
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown path
    #[error("Not found: {0}")]
    NotFound(String),

    /// Wrong method on an accepted path
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider returned a non-success status
    #[error("Upstream delivery error: {0}")]
    Upstream(String),

    /// Outbound HTTP error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::NotFound(_) => 404,
            Error::MethodNotAllowed(_) => 405,
            Error::Validation(_) => 400,
            Error::Upstream(_) => 502,
            _ => 500,
        }
    }

    /// Message safe to return to the caller.
    ///
    /// Validation messages name the missing requirement; everything else is
    /// generic and the detail only reaches the server-side log.
    pub fn public_message(&self) -> &str {
        match self {
            Error::NotFound(_) => "Not found",
            Error::MethodNotAllowed(_) => "Method not allowed",
            Error::Validation(message) => message.as_str(),
            Error::Config(_) => "Server configuration error",
            Error::Upstream(_) => "Failed to send notification to Telegram",
            _ => "Internal server error",
        }
    }
}
