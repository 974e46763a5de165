//! Wall-clock parsing at the API boundary.
//!
//! The core works in milliseconds since the scheduling epoch (midnight
//! of the tournament day). Administrative input arrives as `"HH:MM"`
//! (or `"HH:MM:SS"`) strings; these helpers convert between the two.

use chrono::{NaiveTime, Timelike};

use crate::error::ScheduleError;

/// Parses a wall-clock string (`"HH:MM"` or `"HH:MM:SS"`) into
/// milliseconds since midnight.
///
/// # Errors
/// `InvalidInput` when the string is not a valid time of day.
pub fn parse_clock(input: &str) -> Result<i64, ScheduleError> {
    let trimmed = input.trim();
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| ScheduleError::InvalidInput(format!("not a valid time of day: '{input}'")))?;

    Ok(i64::from(time.num_seconds_from_midnight()) * 1000)
}

/// Formats milliseconds since midnight as `"HH:MM"`.
///
/// Sub-minute precision is truncated; values are taken modulo 24 hours.
pub fn format_clock(ms: i64) -> String {
    let total_minutes = (ms.rem_euclid(24 * 60 * 60 * 1000)) / 60_000;
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}
