//! Wire format for expiration timestamps: `YYYY-MM-DD_HH:MM:SS`, in UTC.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::AppError;

pub const EXPIRATION_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// Parses an expiration query value.
///
/// # Errors
///
/// Returns [`AppError::InvalidExpiration`] if the value does not match
/// [`EXPIRATION_FORMAT`].
pub fn parse_expiration(value: &str) -> Result<DateTime<Utc>, AppError> {
    NaiveDateTime::parse_from_str(value.trim(), EXPIRATION_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| AppError::InvalidExpiration)
}

/// Renders a timestamp in the wire format accepted by [`parse_expiration`].
pub fn format_expiration(at: DateTime<Utc>) -> String {
    at.format(EXPIRATION_FORMAT).to_string()
}
