//! Snapshot contract of the `Date` scalar.
//!
//! A snapshot is a unix timestamp in seconds (number or purely numeric
//! string), a date literal, or null. Values serialize back to ISO-8601 with
//! milliseconds in UTC.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::INVALID_TIMESTAMP;

/// Accepted snapshot shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateSnapshot {
    Seconds(f64),
    Text(String),
    Null,
}

impl fmt::Display for DateSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSnapshot::Seconds(s) => write!(f, "{}", s),
            DateSnapshot::Text(t) => f.write_str(t),
            DateSnapshot::Null => f.write_str("null"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateError {
    #[error("'{snapshot}' {reason}", reason = INVALID_TIMESTAMP)]
    InvalidTimestamp { snapshot: String },
}

impl DateError {
    fn invalid(snapshot: &DateSnapshot) -> Self {
        DateError::InvalidTimestamp {
            snapshot: snapshot.to_string(),
        }
    }
}

/// Milliseconds since the epoch, or `None` for a null snapshot.
pub fn normalize_timestamp_ms(snapshot: &DateSnapshot) -> Result<Option<f64>, DateError> {
    let ms = match snapshot {
        DateSnapshot::Null => return Ok(None),
        DateSnapshot::Seconds(seconds) => seconds * 1000.0,
        DateSnapshot::Text(text) if is_numeric(text) => match leading_float(text) {
            Some(seconds) => seconds * 1000.0,
            None => return Err(DateError::invalid(snapshot)),
        },
        DateSnapshot::Text(text) => match parse_literal(text) {
            Some(date) => date.timestamp_millis() as f64,
            None => return Err(DateError::invalid(snapshot)),
        },
    };

    if ms.is_finite() {
        Ok(Some(ms))
    } else {
        Err(DateError::invalid(snapshot))
    }
}

pub fn from_snapshot(snapshot: &DateSnapshot) -> Result<Option<DateTime<Utc>>, DateError> {
    match normalize_timestamp_ms(snapshot)? {
        None => Ok(None),
        Some(ms) => DateTime::from_timestamp_millis(ms as i64)
            .map(Some)
            .ok_or_else(|| DateError::invalid(snapshot)),
    }
}

pub fn to_snapshot(value: Option<&DateTime<Utc>>) -> DateSnapshot {
    match value {
        Some(date) => DateSnapshot::Text(date.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => DateSnapshot::Null,
    }
}

/// Empty when the snapshot is valid, otherwise a message naming it.
pub fn validation_message(snapshot: &DateSnapshot) -> String {
    match normalize_timestamp_ms(snapshot) {
        Ok(_) => String::new(),
        Err(err) => err.to_string(),
    }
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// The longest leading float, so `"1.5.2"` reads as `1.5`.
fn leading_float(text: &str) -> Option<f64> {
    let end = text
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .nth(1)
        .map_or(text.len(), |(i, _)| i);
    text[..end].parse().ok()
}

fn parse_literal(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(text) {
        return Some(date.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    // Date-only literals are midnight UTC
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> DateSnapshot {
        DateSnapshot::Text(s.to_string())
    }

    #[test]
    fn test_numeric_string_is_seconds() {
        assert_eq!(
            normalize_timestamp_ms(&text("1700000000")).unwrap(),
            Some(1_700_000_000_000.0)
        );
        assert_eq!(normalize_timestamp_ms(&text("1.5")).unwrap(), Some(1500.0));
        assert_eq!(normalize_timestamp_ms(&text("1.5.2")).unwrap(), Some(1500.0));
    }

    #[test]
    fn test_number_is_seconds() {
        assert_eq!(
            normalize_timestamp_ms(&DateSnapshot::Seconds(2.5)).unwrap(),
            Some(2500.0)
        );
    }

    #[test]
    fn test_null_passes_through() {
        assert_eq!(normalize_timestamp_ms(&DateSnapshot::Null).unwrap(), None);
        assert_eq!(from_snapshot(&DateSnapshot::Null).unwrap(), None);
        assert_eq!(to_snapshot(None), DateSnapshot::Null);
        assert_eq!(validation_message(&DateSnapshot::Null), "");
    }

    #[test]
    fn test_iso_round_trip() {
        let snapshot = text("2023-11-14T22:13:20.000Z");
        let date = from_snapshot(&snapshot).unwrap().unwrap();
        assert_eq!(date.timestamp(), 1_700_000_000);
        assert_eq!(to_snapshot(Some(&date)), snapshot);
    }

    #[test]
    fn test_literal_forms() {
        let expected = Some(1_700_000_000_000.0);
        assert_eq!(normalize_timestamp_ms(&text("2023-11-15T00:13:20+02:00")).unwrap(), expected);
        assert_eq!(normalize_timestamp_ms(&text("2023-11-14T22:13:20")).unwrap(), expected);
        assert_eq!(
            normalize_timestamp_ms(&text("2023-11-14")).unwrap(),
            Some(1_699_920_000_000.0)
        );
    }

    #[test]
    fn test_seconds_serialize_as_iso() {
        let date = from_snapshot(&text("1700000000")).unwrap().unwrap();
        assert_eq!(
            to_snapshot(Some(&date)),
            text("2023-11-14T22:13:20.000Z")
        );
    }

    #[test]
    fn test_invalid_literal() {
        let snapshot = text("next tuesday");
        assert!(from_snapshot(&snapshot).is_err());
        assert_eq!(
            validation_message(&snapshot),
            "'next tuesday' doesn't look like a valid literal timestamp or unix timestamp"
        );
        assert!(normalize_timestamp_ms(&text(".")).is_err());
        assert!(normalize_timestamp_ms(&DateSnapshot::Seconds(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_snapshot_deserializes_untagged() {
        let snapshots: Vec<DateSnapshot> =
            serde_json::from_str(r#"[1700000000, "2023-11-14", null]"#).unwrap();
        assert_eq!(
            snapshots,
            vec![
                DateSnapshot::Seconds(1_700_000_000.0),
                text("2023-11-14"),
                DateSnapshot::Null,
            ]
        );
        assert_eq!(serde_json::to_string(&DateSnapshot::Null).unwrap(), "null");
    }
}
