use crate::core::calendar::{UtcOffset, floor_to_local_midnight};
use crate::core::index::TimestampIndex;
use crate::core::types::Bucket;
use crate::core::viewport::TimeViewport;
use crate::error::{TimelineError, TimelineResult};

/// Upper bound on buckets per frame; a step this small for the span is a
/// caller bug, not a zoom level.
const MAX_BUCKETS_PER_FRAME: i64 = 1 << 16;

/// Builds count buckets covering the viewport plus one padding bucket per side.
///
/// The first boundary is the local-midnight floor of the viewport start
/// advanced by whole multiples of `step_ms`, so edges land on natural
/// boundaries and small pans do not jitter them. Buckets are half-open
/// `[start, end)`. Counting restricts to the padded range with two binary
/// searches, then sweeps once with a monotone bucket cursor: O(log n + k).
pub fn build_buckets(
    index: &TimestampIndex,
    viewport: TimeViewport,
    step_ms: i64,
    offset: UtcOffset,
) -> TimelineResult<Vec<Bucket>> {
    let (visible_min, visible_max) = viewport.visible_range();
    let span = visible_max - visible_min;
    validate_step(step_ms, span)?;

    let origin = floor_to_local_midnight(visible_min, offset);
    let aligned_start = origin + (visible_min - origin) / step_ms * step_ms;
    let first_start = aligned_start.saturating_sub(step_ms);

    let limit = visible_max.saturating_add(step_ms);
    let mut buckets = Vec::with_capacity((span / step_ms + 3) as usize);
    let mut start = first_start;
    while start < limit {
        // start < limit <= i64::MAX, so end > start even when saturated.
        let end = start.saturating_add(step_ms);
        buckets.push(Bucket {
            start_ms: start,
            end_ms: end,
            midpoint_ms: start + (end - start) / 2,
            count: 0,
        });
        start = end;
    }

    let in_range = index.range_slice(first_start, start);
    let mut cursor = 0usize;
    for &ts in in_range {
        while cursor < buckets.len() && ts >= buckets[cursor].end_ms {
            cursor += 1;
        }
        if cursor == buckets.len() {
            break;
        }
        if ts >= buckets[cursor].start_ms {
            buckets[cursor].count += 1;
        }
    }

    Ok(buckets)
}

pub(crate) fn validate_step(step_ms: i64, span_ms: i64) -> TimelineResult<()> {
    if step_ms < 1 {
        return Err(TimelineError::InvalidData(
            "bucket step must be >= 1ms".to_owned(),
        ));
    }
    if span_ms / step_ms > MAX_BUCKETS_PER_FRAME {
        return Err(TimelineError::InvalidData(format!(
            "bucket step {step_ms}ms is too small for a {span_ms}ms span"
        )));
    }
    Ok(())
}
