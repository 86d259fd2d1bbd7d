use serde_json::json;
use timeline_rs::core::UtcOffset;
use timeline_rs::core::types::{HOUR_MS, MINUTE_MS};
use timeline_rs::extract::{TimestampFieldPolicy, extract_timestamp_ms};

fn extract(record: &serde_json::Value) -> Option<i64> {
    extract_timestamp_ms(record, &TimestampFieldPolicy::default(), UtcOffset::UTC)
}

#[test]
fn numeric_timestamp_is_accepted_verbatim() {
    let record = json!({ "timestamp": 1_700_000_000_000i64, "message": "login failed" });
    assert_eq!(extract(&record), Some(1_700_000_000_000));
}

#[test]
fn numeric_zero_is_a_valid_timestamp() {
    let record = json!({ "timestamp": 0 });
    assert_eq!(extract(&record), Some(0));
}

#[test]
fn empty_and_whitespace_strings_are_skipped() {
    assert_eq!(extract(&json!({ "timestamp": "" })), None);
    assert_eq!(extract(&json!({ "timestamp": "   " })), None);
}

#[test]
fn empty_primary_falls_through_to_alternate_field() {
    let record = json!({ "timestamp": "", "time": 42 });
    assert_eq!(extract(&record), Some(42));
}

#[test]
fn primary_field_wins_over_alternates() {
    let record = json!({ "timestamp": 10, "time": 20, "ts": 30 });
    assert_eq!(extract(&record), Some(10));
}

#[test]
fn rfc3339_text_parses_to_epoch_millis() {
    let record = json!({ "@timestamp": "1970-01-02T00:00:00Z" });
    assert_eq!(extract(&record), Some(24 * HOUR_MS));

    let with_offset = json!({ "datetime": "1970-01-01T02:00:00+01:00" });
    assert_eq!(extract(&with_offset), Some(HOUR_MS));
}

#[test]
fn naive_text_is_interpreted_in_the_configured_offset() {
    let record = json!({ "timestamp": "1970-01-01 01:00:00" });
    assert_eq!(extract(&record), Some(HOUR_MS));

    let offset = UtcOffset::from_minutes(60).expect("valid offset");
    let shifted = extract_timestamp_ms(&record, &TimestampFieldPolicy::default(), offset);
    assert_eq!(shifted, Some(0));
}

#[test]
fn date_only_text_parses_to_local_midnight() {
    let record = json!({ "date": "1970-01-03" });
    assert_eq!(extract(&record), Some(48 * HOUR_MS));
}

#[test]
fn raw_container_variants_are_searched_last() {
    let nested = json!({ "raw": { "timestamp": 7_000 } });
    assert_eq!(extract(&nested), Some(7_000));

    let shadowed = json!({ "time": 1_000, "raw": { "timestamp": 7_000 } });
    assert_eq!(extract(&shadowed), Some(1_000));
}

#[test]
fn unparseable_records_yield_none() {
    assert_eq!(extract(&json!({ "message": "no timestamp here" })), None);
    assert_eq!(extract(&json!({ "timestamp": "not a date" })), None);
    assert_eq!(extract(&json!({ "timestamp": null })), None);
    assert_eq!(extract(&json!({ "timestamp": true })), None);
    assert_eq!(extract(&json!("just a string")), None);
    assert_eq!(extract(&json!(12345)), None);
}

#[test]
fn fractional_epoch_millis_round_to_integer() {
    let record = json!({ "timestamp": 1_000.6 });
    assert_eq!(extract(&record), Some(1_001));
}

#[test]
fn minute_resolution_text_round_trips_through_minutes() {
    let record = json!({ "timestamp": "1970-01-01 00:05:00" });
    assert_eq!(extract(&record), Some(5 * MINUTE_MS));
}
