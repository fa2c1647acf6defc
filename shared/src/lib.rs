//! Shared library for the calendar event relay.
//!
//! This crate provides the configuration, error types, HTTP helpers, message
//! formatting, and Telegram client used by the webhook Lambda.

pub mod config;
pub mod error;
pub mod http;
pub mod message;
pub mod models;
pub mod telegram;

pub use config::Config;
pub use error::{Error, Result};
pub use message::build_event_message;
pub use models::{ErrorResponse, EventSubmission, EventUser, StatusResponse};
pub use telegram::TelegramClient;
