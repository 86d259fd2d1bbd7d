use timeline_rs::binning::build_ticks;
use timeline_rs::core::types::{DAY_MS, HOUR_MS, MINUTE_MS};
use timeline_rs::core::{TimeViewport, TimestampIndex, UtcOffset};

fn viewport_spanning(values: Vec<i64>) -> TimeViewport {
    let index = TimestampIndex::from_values(values);
    TimeViewport::from_index(&index, UtcOffset::UTC).expect("non-empty index")
}

// 2023-01-01T00:00:00Z in epoch days.
const JAN_2023_DAYS: i64 = 19_358;

#[test]
fn ticks_sit_on_every_bucket_boundary_plus_one_trailing_step() {
    let base = JAN_2023_DAYS * DAY_MS;
    let mut viewport = viewport_spanning(vec![base + MINUTE_MS, base + 2 * DAY_MS]);
    viewport.set_window(base + 6 * HOUR_MS, base + 12 * HOUR_MS);

    let ticks = build_ticks(viewport, HOUR_MS, UtcOffset::UTC).expect("valid step");
    let times: Vec<i64> = ticks.iter().map(|t| t.time_ms).collect();
    let expected: Vec<i64> = (6..=13).map(|h| base + h * HOUR_MS).collect();
    assert_eq!(times, expected);
}

#[test]
fn single_day_window_uses_time_only_labels() {
    let base = JAN_2023_DAYS * DAY_MS;
    let mut viewport = viewport_spanning(vec![base + MINUTE_MS, base + 2 * DAY_MS]);
    viewport.set_window(base + 9 * HOUR_MS, base + 11 * HOUR_MS);

    let ticks = build_ticks(viewport, 30 * MINUTE_MS, UtcOffset::UTC).expect("valid step");
    assert_eq!(ticks.first().expect("non-empty ticks").label, "09:00");
    assert!(ticks.iter().all(|t| t.label.len() == 5));
}

#[test]
fn multi_day_window_with_sub_day_buckets_includes_the_date() {
    let base = JAN_2023_DAYS * DAY_MS;
    let viewport = viewport_spanning(vec![base + MINUTE_MS, base + 3 * DAY_MS - HOUR_MS]);

    let ticks = build_ticks(viewport, 6 * HOUR_MS, UtcOffset::UTC).expect("valid step");
    assert_eq!(ticks.first().expect("non-empty ticks").label, "2023-01-01 00:00");
}

#[test]
fn day_buckets_use_date_only_labels() {
    let base = JAN_2023_DAYS * DAY_MS;
    let viewport = viewport_spanning(vec![base + MINUTE_MS, base + 30 * DAY_MS - HOUR_MS]);

    let ticks = build_ticks(viewport, DAY_MS, UtcOffset::UTC).expect("valid step");
    assert_eq!(ticks.first().expect("non-empty ticks").label, "2023-01-01");
    assert_eq!(ticks[1].label, "2023-01-02");
}

#[test]
fn half_year_plus_windows_collapse_to_month_labels() {
    let base = JAN_2023_DAYS * DAY_MS;
    let viewport = viewport_spanning(vec![base + MINUTE_MS, base + 364 * DAY_MS]);

    let ticks = build_ticks(viewport, DAY_MS, UtcOffset::UTC).expect("valid step");
    assert_eq!(ticks.first().expect("non-empty ticks").label, "2023-01");
}

#[test]
fn labels_follow_the_configured_offset() {
    let base = JAN_2023_DAYS * DAY_MS;
    let offset = UtcOffset::from_minutes(120).expect("valid offset");
    let index = TimestampIndex::from_values(vec![base + MINUTE_MS, base + 20 * HOUR_MS]);
    let viewport = TimeViewport::from_index(&index, offset).expect("non-empty index");

    let ticks = build_ticks(viewport, HOUR_MS, offset).expect("valid step");
    // Midnight at UTC+2 renders as 00:00 even though it is 22:00 UTC.
    assert_eq!(ticks.first().expect("non-empty ticks").label, "00:00");
}
