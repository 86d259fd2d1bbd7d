use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::core::types::{DAY_MS, MINUTE_MS};
use crate::error::{TimelineError, TimelineResult};

/// Fixed display offset used for local-midnight alignment and tick labels.
///
/// A fixed offset keeps midnight arithmetic deterministic; hosts that want
/// wall-clock behavior resolve their zone to an offset before configuring
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    pub const UTC: Self = Self { minutes: 0 };

    pub fn from_minutes(minutes: i32) -> TimelineResult<Self> {
        // Matches the range chrono accepts for fixed offsets.
        if !(-18 * 60..=18 * 60).contains(&minutes) {
            return Err(TimelineError::InvalidData(format!(
                "utc offset out of range: {minutes} minutes"
            )));
        }
        Ok(Self { minutes })
    }

    #[must_use]
    pub fn minutes(self) -> i32 {
        self.minutes
    }

    #[must_use]
    pub(crate) fn fixed_offset(self) -> FixedOffset {
        FixedOffset::east_opt(self.minutes * 60).expect("offset validated on construction")
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        Self::UTC
    }
}

// Deserialization funnels through the same range check as `from_minutes`.
impl TryFrom<i32> for UtcOffset {
    type Error = TimelineError;

    fn try_from(minutes: i32) -> TimelineResult<Self> {
        Self::from_minutes(minutes)
    }
}

impl From<UtcOffset> for i32 {
    fn from(offset: UtcOffset) -> Self {
        offset.minutes
    }
}

/// Largest local-midnight instant at or before `ts_ms`.
///
/// Saturates at the edges of the representable range instead of
/// overflowing; extracted timestamps are accepted verbatim, so `i64::MAX`
/// can reach this.
#[must_use]
pub fn floor_to_local_midnight(ts_ms: i64, offset: UtcOffset) -> i64 {
    let shift = i64::from(offset.minutes()) * MINUTE_MS;
    let local = ts_ms.saturating_add(shift);
    local
        .div_euclid(DAY_MS)
        .saturating_mul(DAY_MS)
        .saturating_sub(shift)
}

/// Smallest local-midnight instant at or after `ts_ms`. Saturates like
/// [`floor_to_local_midnight`].
#[must_use]
pub fn ceil_to_local_midnight(ts_ms: i64, offset: UtcOffset) -> i64 {
    let floor = floor_to_local_midnight(ts_ms, offset);
    if floor >= ts_ms {
        floor
    } else {
        floor.saturating_add(DAY_MS)
    }
}
