//! Shared data models.

use serde::{Deserialize, Serialize};

/// Calendar event submission from the inbound request body.
///
/// `date` and `title` are required, but kept optional at the serde level so
/// that their absence is reported as a validation failure rather than a
/// parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct EventSubmission {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Event time in 24-hour "HH:MM" notation.
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub user: Option<EventUser>,
}

/// Submitter identity attached to an event, if any.
#[derive(Debug, Clone, Deserialize)]
pub struct EventUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Success response body.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
