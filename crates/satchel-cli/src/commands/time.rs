//! `satchel now` command implementation.

use satchel_config::Settings;
use satchel_core::{SatchelError, SatchelResult};
use satchel_time::{from_timestamp, now_at, Clock, SystemClock};
use std::fmt::Write;

/// Execute `satchel now`
pub fn execute(
    timestamp: Option<i64>,
    format: Option<&str>,
    settings: &Settings,
) -> SatchelResult<String> {
    render(&SystemClock, timestamp, format, settings)
}

pub(crate) fn render(
    clock: &impl Clock,
    timestamp: Option<i64>,
    format: Option<&str>,
    settings: &Settings,
) -> SatchelResult<String> {
    let timezone = settings.time.timezone.as_deref();
    let datetime = match timestamp {
        Some(timestamp) => from_timestamp(timestamp, timezone)?,
        None => now_at(clock, timezone)?,
    };

    let Some(format) = format else {
        return Ok(format!("{} ({})", datetime.to_rfc3339(), datetime.timezone().name()));
    };

    // Unknown specifiers surface as a formatter error rather than a panic
    let mut rendered = String::new();
    write!(rendered, "{}", datetime.format(format)).map_err(|_| SatchelError::ConfigValidation {
        field: "format".to_string(),
        reason: format!("Invalid date format '{}'", format),
    })?;
    Ok(rendered)
}
