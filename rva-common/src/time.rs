//! Timestamp utilities
//!
//! Review timestamps are naive local date-times with whole-second precision,
//! rendered as `YYYY-MM-DD HH:MM:SS`. Filter dates are calendar dates in
//! `YYYY-MM-DD` form, compared at midnight.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Wire format of a review timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wire format of a filter date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current local time truncated to whole seconds
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Render a timestamp in wire format
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a wire-format timestamp
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
}

/// Parse a `YYYY-MM-DD` date and return its midnight instant
///
/// Returns `None` when the input is not a calendar date; callers treat that
/// as "no bound".
pub fn parse_date_midnight(s: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Serde adapter for wire-format timestamps
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(de::Error::custom)
    }
}
