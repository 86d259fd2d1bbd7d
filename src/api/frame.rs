use serde::{Deserialize, Serialize};

use crate::core::scrollbar::ThumbGeometry;
use crate::core::types::{Bucket, ChartArea, TimeTick};

/// Fully materialized frame handed to the host's rendering layer.
///
/// Building a frame is idempotent and side-effect-free: concurrent
/// re-renders triggered elsewhere in the host cannot corrupt it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineFrame {
    pub visible_range: (i64, i64),
    pub global_range: (i64, i64),
    pub step_ms: i64,
    pub buckets: Vec<Bucket>,
    pub ticks: Vec<TimeTick>,
    pub thumb: ThumbGeometry,
    pub chart_area: ChartArea,
}
