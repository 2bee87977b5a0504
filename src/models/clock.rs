//! Wall-clock and calendar date parsing.
//!
//! Upstream records carry dates as `YYYY-MM-DD` and times as 24h `HH:MM`
//! strings. These helpers are the single place those strings are parsed.

use chrono::{NaiveDate, NaiveTime};

/// The format used for wall-clock times (24h, minute precision).
pub const CLOCK_FORMAT: &str = "%H:%M";

/// The format used for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a 24h `HH:MM` wall-clock value.
///
/// Surrounding whitespace is ignored. Seconds, `24:00` and out-of-range
/// components are rejected.
///
/// # Examples
///
/// ```
/// use roster_engine::models::parse_clock;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock("22:30"), NaiveTime::from_hms_opt(22, 30, 0));
/// assert_eq!(parse_clock("24:00"), None);
/// assert_eq!(parse_clock("9am"), None);
/// ```
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT).ok()
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Serde adapter that reads and writes [`NaiveTime`] as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::{CLOCK_FORMAT, parse_clock};

    /// Serializes a time as `HH:MM`.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(CLOCK_FORMAT))
    }

    /// Deserializes a time from `HH:MM`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_clock(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid clock time '{raw}', expected HH:MM")))
    }
}
