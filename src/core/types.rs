use serde::{Deserialize, Serialize};

pub const MINUTE_MS: i64 = 60_000;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Hard floor for the visible window span (one minute).
pub const MIN_SPAN_MS: i64 = MINUTE_MS;

/// Hard ceiling for the visible window span (one year).
pub const MAX_SPAN_MS: i64 = 365 * DAY_MS;

/// Bucket-width ladder of human-meaningful durations, finest first.
///
/// Every entry divides `DAY_MS`, so buckets aligned to a local-midnight
/// origin land on natural boundaries (midnight, top of hour, and so on).
pub const STEP_LADDER_MS: [i64; 10] = [
    MINUTE_MS,
    2 * MINUTE_MS,
    5 * MINUTE_MS,
    15 * MINUTE_MS,
    30 * MINUTE_MS,
    HOUR_MS,
    2 * HOUR_MS,
    6 * HOUR_MS,
    12 * HOUR_MS,
    DAY_MS,
];

/// Pixel rectangle available for rendering the bucket chart.
///
/// Height is optional: bucketing only depends on width, hosts that track a
/// fixed widget height can carry it through to their renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub width_px: f64,
    pub height_px: Option<f64>,
}

impl ChartArea {
    #[must_use]
    pub fn new(width_px: f64) -> Self {
        Self {
            width_px,
            height_px: None,
        }
    }

    #[must_use]
    pub fn with_height(mut self, height_px: f64) -> Self {
        self.height_px = Some(height_px);
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        let width_ok = self.width_px.is_finite() && self.width_px > 0.0;
        let height_ok = match self.height_px {
            Some(height) => height.is_finite() && height > 0.0,
            None => true,
        };
        width_ok && height_ok
    }
}

/// One bar of the histogram: a half-open `[start_ms, end_ms)` interval.
///
/// Derived and ephemeral; recomputed on every viewport or size change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub start_ms: i64,
    pub end_ms: i64,
    pub midpoint_ms: i64,
    pub count: u64,
}

/// One labeled axis tick at a bucket boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTick {
    pub time_ms: i64,
    pub label: String,
}
