//! Event Webhook Lambda - Relays calendar event submissions to Telegram.
//!
//! Accepts a POST with a JSON calendar event, validates it, formats the
//! notification text, and forwards it to the Telegram Bot API. Stateless:
//! one outbound call per request, no retries, no persistence.

use std::sync::Arc;

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{error_response, json_response, preflight_response};
use shared::{build_event_message, Config, EventSubmission, StatusResponse, TelegramClient};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Paths that accept event submissions.
const ACCEPTED_PATHS: [&str; 2] = ["/api/event", "/"];

/// Application state
struct AppState {
    config: Config,
    telegram: TelegramClient,
}

impl AppState {
    fn new() -> Self {
        let config = Config::from_env();
        let telegram = TelegramClient::new(config.telegram_api_base.clone());
        Self { config, telegram }
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().as_str().to_string();
    let path = event.uri().path().to_string();

    info!("Event request: {} {}", method, path);

    if !ACCEPTED_PATHS.contains(&path.as_str()) {
        return error_response(404, "Not found");
    }

    if method == "OPTIONS" {
        return preflight_response();
    }

    if method != "POST" {
        return error_response(405, "Method not allowed");
    }

    match process_submission(&state, &event).await {
        Ok(()) => {
            info!("Event notification delivered");
            json_response(200, &StatusResponse::ok())
        }
        Err(err) => {
            error!(error = %err, "Event submission failed");
            error_response(err.status_code(), err.public_message())
        }
    }
}

/// Parse, validate, format, and deliver one submission.
async fn process_submission(state: &AppState, event: &Request) -> shared::Result<()> {
    let submission: EventSubmission = serde_json::from_slice(event.body().as_ref())?;

    let text = build_event_message(&submission)?;
    let (bot_token, chat_id) = state.config.telegram_credentials()?;

    state.telegram.send_message(bot_token, chat_id, &text).await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new());

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
