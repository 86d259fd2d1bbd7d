use chrono::{DateTime, Utc};
use smallvec::SmallVec;

use crate::binning::histogram::validate_step;
use crate::core::calendar::{UtcOffset, floor_to_local_midnight};
use crate::core::types::{DAY_MS, TimeTick};
use crate::core::viewport::TimeViewport;
use crate::error::TimelineResult;

/// Label granularity resolved from the active step and visible span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickLabelPattern {
    /// Day-or-coarser buckets across a multi-month window.
    Month,
    /// Day-or-coarser buckets across a shorter window.
    Date,
    /// Sub-day buckets across a window wider than one day.
    DateTime,
    /// Sub-day buckets inside a single day.
    Time,
}

impl TickLabelPattern {
    fn chrono_pattern(self) -> &'static str {
        match self {
            Self::Month => "%Y-%m",
            Self::Date => "%Y-%m-%d",
            Self::DateTime => "%Y-%m-%d %H:%M",
            Self::Time => "%H:%M",
        }
    }
}

/// Roughly six months; beyond this day buckets read better as months.
const MONTH_PATTERN_SPAN_MS: i64 = 180 * DAY_MS;

pub(crate) fn resolve_tick_label_pattern(
    step_ms: i64,
    visible_span_ms: i64,
) -> TickLabelPattern {
    if step_ms >= DAY_MS {
        if visible_span_ms > MONTH_PATTERN_SPAN_MS {
            TickLabelPattern::Month
        } else {
            TickLabelPattern::Date
        }
    } else if visible_span_ms > DAY_MS {
        TickLabelPattern::DateTime
    } else {
        TickLabelPattern::Time
    }
}

/// One labeled tick per bucket boundary, from the first aligned boundary to
/// the viewport end plus one trailing step.
///
/// Date-only labels on fine zoom levels would repeat; time-only labels on
/// coarse ones would be ambiguous. The pattern resolution avoids both.
pub fn build_ticks(
    viewport: TimeViewport,
    step_ms: i64,
    offset: UtcOffset,
) -> TimelineResult<Vec<TimeTick>> {
    let (visible_min, visible_max) = viewport.visible_range();
    validate_step(step_ms, visible_max - visible_min)?;

    let origin = floor_to_local_midnight(visible_min, offset);
    let first = origin + (visible_min - origin) / step_ms * step_ms;

    let limit = visible_max.saturating_add(step_ms);
    let mut boundaries: SmallVec<[i64; 32]> = SmallVec::new();
    let mut t = first;
    while t <= limit {
        boundaries.push(t);
        let next = t.saturating_add(step_ms);
        if next == t {
            break;
        }
        t = next;
    }

    let pattern = resolve_tick_label_pattern(step_ms, visible_max - visible_min);
    Ok(boundaries
        .into_iter()
        .map(|time_ms| TimeTick {
            label: format_tick_label(time_ms, pattern, offset),
            time_ms,
        })
        .collect())
}

fn format_tick_label(time_ms: i64, pattern: TickLabelPattern, offset: UtcOffset) -> String {
    match DateTime::<Utc>::from_timestamp_millis(time_ms) {
        Some(dt) => dt
            .with_timezone(&offset.fixed_offset())
            .format(pattern.chrono_pattern())
            .to_string(),
        // Out of chrono's representable range; raw millis beat a panic.
        None => time_ms.to_string(),
    }
}
