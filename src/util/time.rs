use chrono::{DateTime, Utc};
use serenity::all::Timestamp;

use crate::error::{internal::InternalError, AppError};

/// Converts a UTC datetime into a Discord embed timestamp.
///
/// # Returns
/// - `Ok(Timestamp)` - Converted timestamp
/// - `Err(AppError::InternalErr(InvalidDiscordTimestamp))` - Out of Discord's range
pub fn to_discord_timestamp(time: DateTime<Utc>) -> Result<Timestamp, AppError> {
    let unix = time.timestamp();
    Timestamp::from_unix_timestamp(unix).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: unix,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Formats an uptime as `x day(s), y hour(s) and z minute(s)`.
///
/// Zero-valued units are omitted; an uptime under a minute reads `0 minute(s)`.
pub fn format_uptime(uptime: chrono::Duration) -> String {
    let total_minutes = uptime.num_minutes().max(0);
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes % (24 * 60)) / 60;
    let minutes = total_minutes % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{} day(s)", days));
    }
    if hours > 0 {
        parts.push(format!("{} hour(s)", hours));
    }
    if minutes > 0 {
        parts.push(format!("{} minute(s)", minutes));
    }

    match parts.split_last() {
        None => "0 minute(s)".to_string(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}
