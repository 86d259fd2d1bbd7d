use serde::{Deserialize, Serialize};

use crate::core::viewport::TimeViewport;

/// Default floor for thumb width so it stays grabbable at extreme zoom.
pub const DEFAULT_MIN_THUMB_WIDTH_PERCENT: f64 = 2.0;

/// Scrollbar thumb position and size as percentages of the track.
///
/// Derived purely from the viewport and the global span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThumbGeometry {
    pub left_percent: f64,
    pub width_percent: f64,
}

#[must_use]
pub fn thumb_geometry(viewport: TimeViewport, min_width_percent: f64) -> ThumbGeometry {
    let (global_min, _) = viewport.global_range();
    let (visible_min, _) = viewport.visible_range();
    let global_span = viewport.global_span().max(1) as f64;

    let mut width = viewport.span() as f64 / global_span * 100.0;
    let mut left = visible_min.saturating_sub(global_min) as f64 / global_span * 100.0;

    let floor = min_width_percent.clamp(0.0, 100.0);
    if width < floor {
        width = floor;
    }
    left = left.clamp(0.0, 100.0 - width);

    ThumbGeometry {
        left_percent: left,
        width_percent: width,
    }
}

/// Active thumb drag: remembers where inside the thumb the pointer grabbed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbDrag {
    grab_offset_px: f64,
}

impl ThumbDrag {
    #[must_use]
    pub fn begin(pointer_x_px: f64, thumb_left_px: f64) -> Self {
        Self {
            grab_offset_px: pointer_x_px - thumb_left_px,
        }
    }

    #[must_use]
    pub fn grab_offset_px(self) -> f64 {
        self.grab_offset_px
    }

    /// Window implied by the pointer's absolute track position.
    ///
    /// The window keeps the current width; the viewport clamp finishes the
    /// job at the track edges.
    #[must_use]
    pub fn window_for_pointer(
        self,
        viewport: TimeViewport,
        pointer_x_px: f64,
        track_width_px: f64,
    ) -> (i64, i64) {
        let (global_min, _) = viewport.global_range();
        let global_span = viewport.global_span() as f64;
        let fraction = (pointer_x_px - self.grab_offset_px) / track_width_px;
        let min = global_min.saturating_add((fraction * global_span).round() as i64);
        (min, min.saturating_add(viewport.span()))
    }
}

/// Time under a click on the track outside the thumb; the window recenters there.
#[must_use]
pub fn track_click_time(viewport: TimeViewport, click_x_px: f64, track_width_px: f64) -> i64 {
    let (global_min, _) = viewport.global_range();
    let global_span = viewport.global_span() as f64;
    let fraction = (click_x_px / track_width_px).clamp(0.0, 1.0);
    global_min.saturating_add((fraction * global_span).round() as i64)
}
