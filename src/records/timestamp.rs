//! Serde helpers for Datatracker timestamps.
//!
//! The API mostly emits naive ISO-8601 (`2018-03-27T14:07:36`), but newer
//! deployments attach an offset (`2018-03-27T14:07:36Z`, `...+00:00`). Both
//! decode to a naive UTC timestamp. Use as `#[serde(with = "timestamp")]`.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer, de};

/// Format used when rendering timestamps, both in query filters and on output.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a timestamp in either accepted form.
#[must_use]
pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_utc());
    }
    raw.parse::<NaiveDateTime>().ok()
}

/// Serializes a timestamp using [`FORMAT`], keeping sub-second precision if present.
///
/// # Errors
///
/// Propagates serializer failures.
pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format("%Y-%m-%dT%H:%M:%S%.f"))
}

/// Deserializes a timestamp in either accepted form.
///
/// # Errors
///
/// Fails if the value is not a string or matches neither form.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
}
