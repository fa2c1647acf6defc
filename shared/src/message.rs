//! Notification message formatting.
//!
//! Pure functions that build the Telegram text for an event submission. The
//! template is fixed: a header line, the date, an optional time line, the
//! title, and an optional submitter line with no trailing newline.

use crate::error::{Error, Result};
use crate::models::{EventSubmission, EventUser};

/// Placeholder shown when a submitter has no usable name.
pub const DEFAULT_USER_LABEL: &str = "Пользователь";

const MISSING_FIELDS: &str = "Missing required fields: date and title";

/// Build the notification text for a submission.
///
/// Fails with a validation error when `date` or `title` is missing or empty.
pub fn build_event_message(event: &EventSubmission) -> Result<String> {
    let date = required_field(&event.date)?;
    let title = required_field(&event.title)?;

    let mut message = String::from("📅 Новое событие\n");
    message.push_str(&format!("Дата: {date}\n"));

    if let Some(time) = non_empty(&event.time) {
        message.push_str(&format!("Время: {}\n", format_time_12h(time)));
    }

    message.push_str(&format!("Событие: {title}\n"));

    if let Some(user) = &event.user {
        message.push_str(&format!("От: {}", display_name(user)));
    }

    Ok(message)
}

fn required_field(field: &Option<String>) -> Result<&str> {
    non_empty(field).ok_or_else(|| Error::Validation(MISSING_FIELDS.to_string()))
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

/// Convert a 24-hour "HH:MM" value to "H:MM AM/PM".
///
/// Minutes pass through unchanged. A value whose hour does not parse as an
/// integer is emitted verbatim.
fn format_time_12h(time: &str) -> String {
    let Some((hours, minutes)) = time.split_once(':') else {
        return time.to_string();
    };
    let Ok(hour) = hours.trim().parse::<u32>() else {
        return time.to_string();
    };

    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };

    format!("{hour12}:{minutes} {meridiem}")
}

/// Display name for the submitter line.
fn display_name(user: &EventUser) -> String {
    let name = non_empty(&user.name).unwrap_or(DEFAULT_USER_LABEL);
    match non_empty(&user.username) {
        Some(username) => format!("{name} (@{username})"),
        None => name.to_string(),
    }
}
