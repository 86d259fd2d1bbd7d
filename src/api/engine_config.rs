use serde::{Deserialize, Serialize};

use crate::binning::BinningTuning;
use crate::core::calendar::UtcOffset;
use crate::core::scrollbar::DEFAULT_MIN_THUMB_WIDTH_PERCENT;
use crate::core::types::ChartArea;
use crate::error::{TimelineError, TimelineResult};
use crate::extract::TimestampFieldPolicy;
use crate::interaction::ScrollTuning;

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load timeline setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    pub chart_area: ChartArea,
    /// Display offset from UTC in minutes; drives local-midnight alignment.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    #[serde(default)]
    pub timestamp_fields: TimestampFieldPolicy,
    #[serde(default)]
    pub binning_tuning: BinningTuning,
    #[serde(default)]
    pub scroll_tuning: ScrollTuning,
    #[serde(default = "default_min_thumb_width_percent")]
    pub min_thumb_width_percent: f64,
}

impl TimelineEngineConfig {
    /// Creates a config with default tunings for the given chart area.
    #[must_use]
    pub fn new(chart_area: ChartArea) -> Self {
        Self {
            chart_area,
            utc_offset_minutes: 0,
            timestamp_fields: TimestampFieldPolicy::default(),
            binning_tuning: BinningTuning::default(),
            scroll_tuning: ScrollTuning::default(),
            min_thumb_width_percent: default_min_thumb_width_percent(),
        }
    }

    /// Sets the display offset from UTC in minutes.
    #[must_use]
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Sets the timestamp candidate-field policy.
    #[must_use]
    pub fn with_timestamp_fields(mut self, policy: TimestampFieldPolicy) -> Self {
        self.timestamp_fields = policy;
        self
    }

    /// Sets bucket pixel-density tuning.
    #[must_use]
    pub fn with_binning_tuning(mut self, tuning: BinningTuning) -> Self {
        self.binning_tuning = tuning;
        self
    }

    /// Sets scroll-gesture coalescing tuning.
    #[must_use]
    pub fn with_scroll_tuning(mut self, tuning: ScrollTuning) -> Self {
        self.scroll_tuning = tuning;
        self
    }

    /// Sets the minimum scrollbar thumb width as a percent of the track.
    #[must_use]
    pub fn with_min_thumb_width_percent(mut self, percent: f64) -> Self {
        self.min_thumb_width_percent = percent;
        self
    }

    pub(super) fn validated_offset(&self) -> TimelineResult<UtcOffset> {
        UtcOffset::from_minutes(self.utc_offset_minutes)
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.chart_area.is_valid() {
            return Err(TimelineError::InvalidChartArea {
                width_px: self.chart_area.width_px,
            });
        }
        self.validated_offset()?;
        self.binning_tuning.validate()?;
        self.scroll_tuning.validate()?;
        if !self.min_thumb_width_percent.is_finite()
            || self.min_thumb_width_percent <= 0.0
            || self.min_thumb_width_percent > 100.0
        {
            return Err(TimelineError::InvalidData(
                "minimum thumb width percent must be finite and in (0, 100]".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_min_thumb_width_percent() -> f64 {
    DEFAULT_MIN_THUMB_WIDTH_PERCENT
}
