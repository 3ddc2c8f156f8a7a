use chrono::{NaiveDateTime, Weekday};
use tracing::warn;

use crate::error::{BikeshareError, Result};

/// Timestamp layouts found in the city files, most common first.
const FMTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Parse a trip timestamp such as `"2017-01-01 00:07:57"`.
///
/// The files carry local wall-clock times without an offset, so the result
/// is a naive timestamp. Returns [`BikeshareError::TimestampParse`] when no
/// known layout matches.
pub fn parse_trip_timestamp(s: &str) -> Result<NaiveDateTime> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(BikeshareError::TimestampParse(s.to_string()));
    }

    for fmt in FMTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(naive);
        }
    }

    warn!("could not parse timestamp \"{}\"", s);
    Err(BikeshareError::TimestampParse(s.to_string()))
}

/// Like [`parse_trip_timestamp`] but treats a blank field as "not recorded".
pub fn parse_optional_timestamp(s: Option<&str>) -> Result<Option<NaiveDateTime>> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_trip_timestamp(v).map(Some),
    }
}

// ── Weekday names ─────────────────────────────────────────────────────────────

/// Full English name of `day`, capitalized (`"Monday"` ... `"Sunday"`).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
