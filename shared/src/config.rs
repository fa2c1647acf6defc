//! Configuration management for the webhook.

use std::env;

use crate::error::{Error, Result};

/// Default Telegram Bot API base URL.
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Application configuration loaded from environment variables.
///
/// Built once at process startup. The Telegram credentials stay optional so
/// that a misconfigured deployment answers requests with a configuration
/// error instead of failing to start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token
    pub telegram_bot_token: Option<String>,
    /// Destination chat identifier
    pub telegram_chat_id: Option<String>,
    /// Telegram API base URL
    pub telegram_api_base: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN")
                .ok()
                .filter(|v| !v.is_empty()),
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID").ok().filter(|v| !v.is_empty()),
            telegram_api_base: env::var("TELEGRAM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_TELEGRAM_API_BASE.to_string()),
        }
    }

    /// Credentials required for the outbound call, or a configuration error.
    pub fn telegram_credentials(&self) -> Result<(&str, &str)> {
        match (&self.telegram_bot_token, &self.telegram_chat_id) {
            (Some(token), Some(chat_id)) => Ok((token, chat_id)),
            _ => Err(Error::Config(
                "TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set".to_string(),
            )),
        }
    }
}
