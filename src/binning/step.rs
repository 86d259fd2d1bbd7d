use serde::{Deserialize, Serialize};

use crate::core::types::{DAY_MS, MIN_SPAN_MS, STEP_LADDER_MS};
use crate::error::{TimelineError, TimelineResult};

/// Coarse ceiling on bucket count for the span-based ladder selection.
const COARSE_MAX_BUCKETS: i64 = 48;

/// Pixel-density tuning for the refinement pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinningTuning {
    /// Narrowest acceptable rendered bucket.
    pub min_bucket_px: f64,
    /// Widest acceptable rendered bucket.
    pub max_bucket_px: f64,
    /// Density the refinement steps toward when outside the band.
    pub target_bucket_px: f64,
    /// Cap on double/halve refinement rounds.
    pub max_refine_rounds: u8,
}

impl Default for BinningTuning {
    fn default() -> Self {
        Self {
            min_bucket_px: 12.0,
            max_bucket_px: 40.0,
            target_bucket_px: 24.0,
            max_refine_rounds: 6,
        }
    }
}

impl BinningTuning {
    pub fn validate(self) -> TimelineResult<Self> {
        let ordered = self.min_bucket_px <= self.target_bucket_px
            && self.target_bucket_px <= self.max_bucket_px;
        if !self.min_bucket_px.is_finite()
            || !self.max_bucket_px.is_finite()
            || !self.target_bucket_px.is_finite()
            || self.min_bucket_px <= 0.0
            || !ordered
        {
            return Err(TimelineError::InvalidData(
                "bucket pixel band must be finite and ordered min <= target <= max".to_owned(),
            ));
        }
        if self.max_refine_rounds == 0 {
            return Err(TimelineError::InvalidData(
                "at least one refinement round is required".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Picks the finest ladder duration whose bucket count fits the span.
///
/// A multi-month span lands on the 24h tier, a multi-hour span on minutes,
/// matching calendar-aware zoom levels. Spans coarser than the ladder keep
/// the 24h tier; the density pass widens further if pixels demand it.
#[must_use]
pub fn coarse_step_for_span(span_ms: i64) -> i64 {
    let span = span_ms.max(1);
    for step in STEP_LADDER_MS {
        if span / step <= COARSE_MAX_BUCKETS {
            return step;
        }
    }
    DAY_MS
}

/// Doubles or halves the coarse step until the rendered bucket width falls
/// inside the configured pixel band.
///
/// Bounded by `MIN_SPAN_MS` below and the visible span above, and by a fixed
/// round count, so bar width stays visually stable across container sizes
/// without ever looping unbounded.
#[must_use]
pub fn refine_step_for_density(
    coarse_step_ms: i64,
    span_ms: i64,
    width_px: f64,
    tuning: BinningTuning,
) -> i64 {
    let span = span_ms.max(1);
    let ceiling = span.max(MIN_SPAN_MS);
    let mut step = coarse_step_ms.clamp(MIN_SPAN_MS, ceiling);

    if !width_px.is_finite() || width_px <= 0.0 {
        return step;
    }

    for _ in 0..tuning.max_refine_rounds {
        let buckets = (span as f64 / step as f64).max(1.0);
        let px_per_bucket = width_px / buckets;
        if px_per_bucket >= tuning.min_bucket_px && px_per_bucket <= tuning.max_bucket_px {
            break;
        }

        let next = if px_per_bucket < tuning.target_bucket_px {
            step.saturating_mul(2).min(ceiling)
        } else {
            (step / 2).max(MIN_SPAN_MS)
        };
        if next == step {
            break;
        }
        step = next;
    }

    step
}
