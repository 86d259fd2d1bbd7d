use crate::core::types::ChartArea;
use crate::error::{TimelineError, TimelineResult};

/// Linear mapping between epoch milliseconds and horizontal pixel offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePixelMap {
    start_ms: i64,
    end_ms: i64,
}

impl TimePixelMap {
    pub fn new(start_ms: i64, end_ms: i64) -> TimelineResult<Self> {
        if end_ms <= start_ms {
            return Err(TimelineError::InvalidData(
                "pixel map range must be non-empty".to_owned(),
            ));
        }
        Ok(Self { start_ms, end_ms })
    }

    #[must_use]
    pub fn range(self) -> (i64, i64) {
        (self.start_ms, self.end_ms)
    }

    pub fn time_to_pixel(self, time_ms: i64, area: ChartArea) -> TimelineResult<f64> {
        if !area.is_valid() {
            return Err(TimelineError::InvalidChartArea {
                width_px: area.width_px,
            });
        }

        let span = (self.end_ms - self.start_ms) as f64;
        let normalized = (time_ms - self.start_ms) as f64 / span;
        Ok(normalized * area.width_px)
    }

    pub fn pixel_to_time(self, pixel: f64, area: ChartArea) -> TimelineResult<i64> {
        if !area.is_valid() {
            return Err(TimelineError::InvalidChartArea {
                width_px: area.width_px,
            });
        }
        if !pixel.is_finite() {
            return Err(TimelineError::InvalidData(
                "pixel must be finite".to_owned(),
            ));
        }

        let span = (self.end_ms - self.start_ms) as f64;
        let normalized = pixel / area.width_px;
        Ok(self.start_ms + (normalized * span).round() as i64)
    }
}
