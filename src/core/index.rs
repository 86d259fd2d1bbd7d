use serde_json::Value;
use tracing::debug;

use crate::core::calendar::UtcOffset;
use crate::extract::{TimestampFieldPolicy, extract_timestamp_ms};

/// Sorted ascending epoch-millisecond index over a record set.
///
/// Records without a parseable timestamp are dropped from the index only;
/// the host keeps the record itself. Rebuilt wholesale whenever the record
/// set changes identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimestampIndex {
    values: Vec<i64>,
}

impl TimestampIndex {
    pub fn from_records(
        records: &[Value],
        policy: &TimestampFieldPolicy,
        offset: UtcOffset,
    ) -> Self {
        let mut values: Vec<i64> = records
            .iter()
            .filter_map(|record| extract_timestamp_ms(record, policy, offset))
            .collect();
        values.sort_unstable();
        debug!(
            indexed = values.len(),
            dropped = records.len() - values.len(),
            "rebuilt timestamp index"
        );
        Self { values }
    }

    /// Builds an index directly from raw millisecond values.
    #[must_use]
    pub fn from_values(mut values: Vec<i64>) -> Self {
        values.sort_unstable();
        Self { values }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Earliest and latest indexed timestamps.
    #[must_use]
    pub fn bounds(&self) -> Option<(i64, i64)> {
        Some((*self.values.first()?, *self.values.last()?))
    }

    /// Timestamps inside the half-open range `[start_ms, end_ms)`.
    ///
    /// Two binary searches, so callers can follow with a single linear sweep.
    #[must_use]
    pub fn range_slice(&self, start_ms: i64, end_ms: i64) -> &[i64] {
        if end_ms <= start_ms {
            return &[];
        }
        let lower = self.values.partition_point(|&t| t < start_ms);
        let upper = self.values.partition_point(|&t| t < end_ms);
        &self.values[lower..upper]
    }
}
