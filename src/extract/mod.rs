//! Best-effort timestamp extraction from loosely-structured log records.
//!
//! Log records arrive with no schema guarantees; several timestamp-bearing
//! field names may or may not be present, as numbers or as text in assorted
//! calendar formats. Extraction walks an ordered candidate list and returns
//! the first value it can turn into epoch milliseconds.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use serde::{Deserialize, Serialize};

use crate::core::calendar::UtcOffset;
use crate::core::types::MINUTE_MS;

/// Ordered candidate lookup: primary field, then alternates, then the same
/// names nested under raw-payload containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampFieldPolicy {
    pub primary_field: String,
    pub alternate_fields: Vec<String>,
    pub raw_container_fields: Vec<String>,
}

impl Default for TimestampFieldPolicy {
    fn default() -> Self {
        Self {
            primary_field: "timestamp".to_owned(),
            alternate_fields: vec![
                "@timestamp".to_owned(),
                "time".to_owned(),
                "ts".to_owned(),
                "datetime".to_owned(),
                "date".to_owned(),
                "event_time".to_owned(),
            ],
            raw_container_fields: vec!["raw".to_owned(), "_raw".to_owned()],
        }
    }
}

impl TimestampFieldPolicy {
    fn candidates(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_field.as_str())
            .chain(self.alternate_fields.iter().map(String::as_str))
    }
}

/// Returns the record's timestamp in epoch milliseconds, or `None`.
///
/// Numeric values are accepted verbatim when finite; zero is a valid
/// timestamp and no range check is applied (range filtering happens
/// implicitly through bucket placement). Strings go through calendar
/// parsing; empty or whitespace-only strings are skipped rather than read
/// as zero. Pure function of its input.
#[must_use]
pub fn extract_timestamp_ms(
    record: &Value,
    policy: &TimestampFieldPolicy,
    offset: UtcOffset,
) -> Option<i64> {
    let object = record.as_object()?;

    for field in policy.candidates() {
        if let Some(ms) = object.get(field).and_then(|v| value_to_epoch_ms(v, offset)) {
            return Some(ms);
        }
    }

    for container in &policy.raw_container_fields {
        let Some(Value::Object(raw)) = object.get(container) else {
            continue;
        };
        for field in policy.candidates() {
            if let Some(ms) = raw.get(field).and_then(|v| value_to_epoch_ms(v, offset)) {
                return Some(ms);
            }
        }
    }

    None
}

const NAIVE_DATETIME_PATTERNS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

const NAIVE_DATE_PATTERNS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

fn value_to_epoch_ms(value: &Value, offset: UtcOffset) -> Option<i64> {
    match value {
        Value::Number(number) => {
            if let Some(ms) = number.as_i64() {
                return Some(ms);
            }
            let ms = number.as_f64()?;
            ms.is_finite().then(|| ms.round() as i64)
        }
        Value::String(text) => parse_datetime_text(text.trim(), offset),
        _ => None,
    }
}

fn parse_datetime_text(text: &str, offset: UtcOffset) -> Option<i64> {
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.timestamp_millis());
    }

    for pattern in NAIVE_DATETIME_PATTERNS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(naive_to_epoch_ms(naive, offset));
        }
    }
    for pattern in NAIVE_DATE_PATTERNS {
        if let Ok(date) = NaiveDate::parse_from_str(text, pattern) {
            let naive = date.and_hms_opt(0, 0, 0)?;
            return Some(naive_to_epoch_ms(naive, offset));
        }
    }

    None
}

/// Offset-naive text is interpreted in the configured display offset.
fn naive_to_epoch_ms(naive: NaiveDateTime, offset: UtcOffset) -> i64 {
    naive.and_utc().timestamp_millis() - i64::from(offset.minutes()) * MINUTE_MS
}
