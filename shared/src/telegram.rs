//! Telegram Bot API client.

use serde_json::json;
use tracing::error;

use crate::error::{Error, Result};

/// Thin client for the Telegram `sendMessage` endpoint.
///
/// One request per call, no retries; the caller decides how a failure maps
/// to its own response.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    api_base: String,
}

impl TelegramClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }

    /// Send a text message to the given chat.
    ///
    /// A non-success provider status is logged together with the provider's
    /// own response body and surfaced as an upstream error; the body itself
    /// is never forwarded to the caller.
    pub async fn send_message(&self, bot_token: &str, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, bot_token);

        let payload = json!({
            "chat_id": chat_id,
            "text": text,
        });

        let response = self.http.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "Telegram API error");
            return Err(Error::Upstream(format!("Telegram API returned {status}")));
        }

        Ok(())
    }
}
