use serde::{Deserialize, Serialize};

use crate::binning::step::coarse_step_for_span;
use crate::core::calendar::{UtcOffset, ceil_to_local_midnight, floor_to_local_midnight};
use crate::core::index::TimestampIndex;
use crate::core::types::{DAY_MS, MAX_SPAN_MS, MIN_SPAN_MS};
use crate::error::{TimelineError, TimelineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanDirection {
    Backward,
    Forward,
}

impl PanDirection {
    #[must_use]
    pub fn sign(self) -> i64 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// Visible time window over a data-derived global span.
///
/// Global bounds are fixed at construction: the local-midnight floor of the
/// earliest timestamp and the local-midnight ceiling of the latest. Every
/// mutator routes through the same clamp, so the invariants
/// `MIN_SPAN_MS <= span <= min(MAX_SPAN_MS, global_span)` and
/// `global_min <= visible_min < visible_max <= global_max` hold after any
/// operation sequence. Out-of-range requests are corrected, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeViewport {
    visible_min: i64,
    visible_max: i64,
    global_min: i64,
    global_max: i64,
}

impl TimeViewport {
    /// Fits a viewport to the full data span of a non-empty index.
    #[must_use]
    pub fn from_index(index: &TimestampIndex, offset: UtcOffset) -> Option<Self> {
        let (first, last) = index.bounds()?;
        let mut global_min = floor_to_local_midnight(first, offset);
        let mut global_max = ceil_to_local_midnight(last, offset);
        if global_max <= global_min {
            // All data sits exactly on one midnight; show that whole day.
            global_max = global_min.saturating_add(DAY_MS);
        }
        if global_max <= global_min {
            // Data saturated at the top of the representable range.
            global_min = global_max.saturating_sub(DAY_MS);
        }
        let mut viewport = Self {
            visible_min: global_min,
            visible_max: global_max,
            global_min,
            global_max,
        };
        // Data wider than MAX_SPAN_MS still starts at a clamped window.
        viewport.fit();
        Some(viewport)
    }

    #[must_use]
    pub fn visible_range(self) -> (i64, i64) {
        (self.visible_min, self.visible_max)
    }

    #[must_use]
    pub fn global_range(self) -> (i64, i64) {
        (self.global_min, self.global_max)
    }

    #[must_use]
    pub fn span(self) -> i64 {
        self.visible_max - self.visible_min
    }

    #[must_use]
    pub fn global_span(self) -> i64 {
        self.global_max.saturating_sub(self.global_min)
    }

    #[must_use]
    pub fn midpoint(self) -> i64 {
        self.visible_min + self.span() / 2
    }

    /// Resets the visible window to the full global span, subject to the
    /// span ceiling. Idempotent.
    pub fn fit(&mut self) {
        self.apply(self.global_min, self.global_max);
    }

    /// Rescales the window around its midpoint.
    ///
    /// `factor > 1.0` zooms in (narrower window), `0.0 < factor < 1.0` zooms
    /// out. The result is clamped to the span limits.
    pub fn zoom(&mut self, factor: f64) -> TimelineResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(TimelineError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }

        let midpoint = self.midpoint();
        let target_span = ((self.span() as f64) / factor).round() as i64;
        let requested_min = midpoint.saturating_sub(target_span / 2);
        self.apply(requested_min, requested_min.saturating_add(target_span));
        Ok(())
    }

    /// Shifts the window by `direction * max(bucket_step, span/5) * magnitude`.
    ///
    /// The step term scales panning with zoom level; the magnitude term
    /// scales it with gesture strength.
    pub fn pan(&mut self, direction: PanDirection, magnitude: f64) -> TimelineResult<()> {
        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(TimelineError::InvalidData(
                "pan magnitude must be finite and >= 0".to_owned(),
            ));
        }

        let base = coarse_step_for_span(self.span()).max(self.span() / 5);
        // `as i64` saturates, so huge but finite magnitudes pin at an edge.
        let requested = (((base as f64) * magnitude).round() as i64).saturating_mul(direction.sign());
        // Clamping to the remaining slack keeps the window width exact.
        let shift = requested.clamp(
            self.global_min.saturating_sub(self.visible_min),
            self.global_max.saturating_sub(self.visible_max),
        );
        self.apply(self.visible_min + shift, self.visible_max + shift);
        Ok(())
    }

    /// Centers the current window width on `time_ms`.
    pub fn recenter(&mut self, time_ms: i64) {
        let span = self.span();
        let target = time_ms.clamp(self.global_min, self.global_max);
        let requested_min = target.saturating_sub(span / 2);
        self.apply(requested_min, requested_min.saturating_add(span));
    }

    /// Requests an explicit window; used by scrollbar thumb drags.
    pub fn set_window(&mut self, min_ms: i64, max_ms: i64) {
        self.apply(min_ms, max_ms);
    }

    /// Shared invariant enforcement for every mutator.
    ///
    /// Span is clamped around the requested midpoint; a window poking past a
    /// global bound is translated whole so its width survives. All arithmetic
    /// saturates, so timestamps near `i64::MAX` cannot overflow here.
    fn apply(&mut self, requested_min: i64, requested_max: i64) {
        let global_span = self.global_span().max(1);
        let span_hi = MAX_SPAN_MS.min(global_span).max(1);
        let span_lo = MIN_SPAN_MS.min(span_hi);

        let requested_span = requested_max.saturating_sub(requested_min);
        let midpoint = requested_min.saturating_add(requested_span / 2);
        let span = requested_span.clamp(span_lo, span_hi);

        // span <= global_span, so clamping the left edge translates the
        // whole window into bounds without changing its width.
        let left_max = self.global_max.saturating_sub(span);
        let min = midpoint
            .saturating_sub(span / 2)
            .clamp(self.global_min, left_max);

        self.visible_min = min;
        self.visible_max = min.saturating_add(span);
    }
}
