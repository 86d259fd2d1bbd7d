use serde::{Deserialize, Serialize};

use crate::core::viewport::PanDirection;
use crate::error::{TimelineError, TimelineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    DraggingThumb,
}

/// Discrete viewport mutation request.
///
/// Host input handlers enqueue commands; the engine drains the queue once
/// per tick so every gesture lands as exactly one state commit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewportCommand {
    Fit,
    Zoom { factor: f64 },
    Pan { direction: PanDirection, magnitude: f64 },
    Recenter { time_ms: i64 },
    SetWindow { min_ms: i64, max_ms: i64 },
}

/// FIFO of pending viewport commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandQueue {
    pending: Vec<ViewportCommand>,
}

impl CommandQueue {
    pub fn push(&mut self, command: ViewportCommand) {
        self.pending.push(command);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes every pending command in arrival order.
    pub fn drain(&mut self) -> Vec<ViewportCommand> {
        std::mem::take(&mut self.pending)
    }
}

/// Tuning for collapsing raw scroll deltas into pan magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollTuning {
    /// Raw delta corresponding to magnitude 1.0.
    pub reference_delta: f64,
    pub min_magnitude: f64,
    pub max_magnitude: f64,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            reference_delta: 100.0,
            min_magnitude: 0.2,
            max_magnitude: 2.0,
        }
    }
}

impl ScrollTuning {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.reference_delta.is_finite() || self.reference_delta <= 0.0 {
            return Err(TimelineError::InvalidData(
                "scroll reference delta must be finite and > 0".to_owned(),
            ));
        }
        if !self.min_magnitude.is_finite()
            || !self.max_magnitude.is_finite()
            || self.min_magnitude <= 0.0
            || self.min_magnitude > self.max_magnitude
        {
            return Err(TimelineError::InvalidData(
                "scroll magnitude clamp must be finite and ordered".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Accumulates raw wheel/pointer deltas between ticks.
///
/// Fast scrolling fires many small input events; accumulate-then-flush
/// collapses them into at most one pan per rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollAccumulator {
    accumulated: f64,
}

impl ScrollAccumulator {
    pub fn accumulate(&mut self, delta: f64) {
        if delta.is_finite() {
            self.accumulated += delta;
        }
    }

    #[must_use]
    pub fn pending(&self) -> f64 {
        self.accumulated
    }

    /// Converts everything accumulated so far into one clamped pan.
    pub fn flush(&mut self, tuning: ScrollTuning) -> Option<(PanDirection, f64)> {
        let raw = std::mem::take(&mut self.accumulated);
        if raw == 0.0 {
            return None;
        }

        let direction = if raw < 0.0 {
            PanDirection::Backward
        } else {
            PanDirection::Forward
        };
        let magnitude =
            (raw.abs() / tuning.reference_delta).clamp(tuning.min_magnitude, tuning.max_magnitude);
        Some((direction, magnitude))
    }
}

/// Cross-event pointer state for scrollbar thumb drags.
///
/// The drag flag is the only mutable cross-event state in the widget and is
/// cleared unconditionally on pointer release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    thumb_grab_offset_px: f64,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn thumb_grab_offset_px(self) -> f64 {
        self.thumb_grab_offset_px
    }

    pub fn begin_thumb_drag(&mut self, grab_offset_px: f64) {
        self.mode = InteractionMode::DraggingThumb;
        self.thumb_grab_offset_px = grab_offset_px;
    }

    pub fn end_drag(&mut self) {
        self.mode = InteractionMode::Idle;
        self.thumb_grab_offset_px = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollAccumulator, ScrollTuning};
    use crate::core::viewport::PanDirection;

    #[test]
    fn accumulator_collapses_many_events_into_one_pan() {
        let mut accumulator = ScrollAccumulator::default();
        for _ in 0..50 {
            accumulator.accumulate(3.0);
        }
        let (direction, magnitude) = accumulator
            .flush(ScrollTuning::default())
            .expect("pending delta");
        assert_eq!(direction, PanDirection::Forward);
        assert_eq!(magnitude, 1.5);
        assert_eq!(accumulator.flush(ScrollTuning::default()), None);
    }

    #[test]
    fn tiny_and_huge_gestures_clamp_to_band() {
        let tuning = ScrollTuning::default();
        let mut accumulator = ScrollAccumulator::default();
        accumulator.accumulate(-1.0);
        let (direction, magnitude) = accumulator.flush(tuning).expect("pending delta");
        assert_eq!(direction, PanDirection::Backward);
        assert_eq!(magnitude, 0.2);

        accumulator.accumulate(10_000.0);
        let (_, magnitude) = accumulator.flush(tuning).expect("pending delta");
        assert_eq!(magnitude, 2.0);
    }

    #[test]
    fn non_finite_deltas_are_ignored() {
        let mut accumulator = ScrollAccumulator::default();
        accumulator.accumulate(f64::NAN);
        accumulator.accumulate(f64::INFINITY);
        assert_eq!(accumulator.flush(ScrollTuning::default()), None);
    }
}
