use serde_json::Value;
use tracing::trace;

use crate::binning::{build_buckets, build_ticks, coarse_step_for_span, refine_step_for_density};
use crate::core::calendar::UtcOffset;
use crate::core::index::TimestampIndex;
use crate::core::scrollbar::{ThumbDrag, ThumbGeometry, thumb_geometry, track_click_time};
use crate::core::types::ChartArea;
use crate::core::viewport::{PanDirection, TimeViewport};
use crate::error::{TimelineError, TimelineResult};
use crate::extensions::{PluginContext, TimelineEvent, TimelinePlugin};
use crate::interaction::{CommandQueue, InteractionMode, InteractionState, ScrollAccumulator, ViewportCommand};

use super::engine_config::TimelineEngineConfig;
use super::frame::TimelineFrame;

/// Headless timeline widget engine.
///
/// Owns the timestamp index and the viewport exclusively; no other component
/// mutates them. All operations are synchronous and complete before control
/// returns to the caller.
pub struct TimelineEngine {
    config: TimelineEngineConfig,
    offset: UtcOffset,
    index: TimestampIndex,
    viewport: Option<TimeViewport>,
    interaction: InteractionState,
    queue: CommandQueue,
    scroll: ScrollAccumulator,
    thumb_drag: Option<ThumbDrag>,
    plugins: Vec<Box<dyn TimelinePlugin>>,
}

impl TimelineEngine {
    pub fn new(config: TimelineEngineConfig) -> TimelineResult<Self> {
        config.validate()?;
        let offset = config.validated_offset()?;
        Ok(Self {
            config,
            offset,
            index: TimestampIndex::default(),
            viewport: None,
            interaction: InteractionState::default(),
            queue: CommandQueue::default(),
            scroll: ScrollAccumulator::default(),
            thumb_drag: None,
            plugins: Vec::new(),
        })
    }

    /// Replaces the record set: rebuilds the index and resets the viewport
    /// to the full data span.
    pub fn set_records(&mut self, records: &[Value]) {
        self.index = TimestampIndex::from_records(records, &self.config.timestamp_fields, self.offset);
        self.viewport = TimeViewport::from_index(&self.index, self.offset);

        let indexed = self.index.len();
        self.emit(TimelineEvent::RecordsUpdated {
            indexed,
            dropped: records.len() - indexed,
        });
        if let Some(viewport) = self.viewport {
            let (start_ms, end_ms) = viewport.visible_range();
            self.emit(TimelineEvent::VisibleRangeChanged { start_ms, end_ms });
        }
    }

    pub fn set_chart_area(&mut self, chart_area: ChartArea) -> TimelineResult<()> {
        if !chart_area.is_valid() {
            return Err(TimelineError::InvalidChartArea {
                width_px: chart_area.width_px,
            });
        }
        self.config.chart_area = chart_area;
        Ok(())
    }

    #[must_use]
    pub fn chart_area(&self) -> ChartArea {
        self.config.chart_area
    }

    #[must_use]
    pub fn timestamp_count(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn viewport(&self) -> Option<TimeViewport> {
        self.viewport
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    pub fn register_plugin(&mut self, plugin: Box<dyn TimelinePlugin>) {
        self.plugins.push(plugin);
    }

    /// Notifies plugins that the user asked for fresh data. Re-fetching is
    /// the host's responsibility.
    pub fn request_refresh(&mut self) {
        self.emit(TimelineEvent::RefreshRequested);
    }

    pub fn fit(&mut self) {
        if let Some(mut viewport) = self.viewport {
            let before = viewport.visible_range();
            viewport.fit();
            self.commit(viewport, before);
        }
    }

    pub fn zoom(&mut self, factor: f64) -> TimelineResult<()> {
        let Some(mut viewport) = self.viewport else {
            return Ok(());
        };
        let before = viewport.visible_range();
        viewport.zoom(factor)?;
        self.commit(viewport, before);
        Ok(())
    }

    pub fn pan(&mut self, direction: PanDirection, magnitude: f64) -> TimelineResult<()> {
        let Some(mut viewport) = self.viewport else {
            return Ok(());
        };
        let before = viewport.visible_range();
        viewport.pan(direction, magnitude)?;
        self.commit(viewport, before);
        Ok(())
    }

    pub fn recenter(&mut self, time_ms: i64) {
        if let Some(mut viewport) = self.viewport {
            let before = viewport.visible_range();
            viewport.recenter(time_ms);
            self.commit(viewport, before);
        }
    }

    pub fn set_visible_window(&mut self, min_ms: i64, max_ms: i64) {
        if let Some(mut viewport) = self.viewport {
            let before = viewport.visible_range();
            viewport.set_window(min_ms, max_ms);
            self.commit(viewport, before);
        }
    }

    /// Queues a command for the next `tick`.
    pub fn enqueue(&mut self, command: ViewportCommand) {
        self.queue.push(command);
    }

    #[must_use]
    pub fn pending_commands(&self) -> usize {
        self.queue.len()
    }

    /// Feeds a raw wheel/pointer delta into the scroll accumulator.
    pub fn on_scroll_delta(&mut self, delta: f64) {
        self.scroll.accumulate(delta);
    }

    /// Drains the scroll accumulator and command queue: one commit per tick.
    ///
    /// Hosts call this from their animation-frame/render callback so rapid
    /// input events never trigger intermediate recomputation.
    pub fn tick(&mut self) -> TimelineResult<()> {
        if let Some((direction, magnitude)) = self.scroll.flush(self.config.scroll_tuning) {
            self.queue.push(ViewportCommand::Pan { direction, magnitude });
        }

        for command in self.queue.drain() {
            self.apply_command(command)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn thumb(&self) -> Option<ThumbGeometry> {
        let viewport = self.viewport?;
        Some(thumb_geometry(viewport, self.config.min_thumb_width_percent))
    }

    /// Pointer-down on the scrollbar track.
    ///
    /// Inside the thumb it begins a drag; outside it recenters the window on
    /// the clicked time.
    pub fn on_track_pointer_down(
        &mut self,
        pointer_x_px: f64,
        track_width_px: f64,
    ) -> TimelineResult<()> {
        validate_track(pointer_x_px, track_width_px)?;
        let Some(viewport) = self.viewport else {
            return Ok(());
        };

        let geometry = thumb_geometry(viewport, self.config.min_thumb_width_percent);
        let thumb_left_px = geometry.left_percent / 100.0 * track_width_px;
        let thumb_width_px = geometry.width_percent / 100.0 * track_width_px;

        if pointer_x_px >= thumb_left_px && pointer_x_px <= thumb_left_px + thumb_width_px {
            self.thumb_drag = Some(ThumbDrag::begin(pointer_x_px, thumb_left_px));
            self.interaction
                .begin_thumb_drag(pointer_x_px - thumb_left_px);
        } else {
            self.recenter(track_click_time(viewport, pointer_x_px, track_width_px));
        }
        Ok(())
    }

    /// Pointer-move during a thumb drag; no-op when idle.
    pub fn on_track_pointer_move(
        &mut self,
        pointer_x_px: f64,
        track_width_px: f64,
    ) -> TimelineResult<()> {
        validate_track(pointer_x_px, track_width_px)?;
        let (Some(drag), Some(viewport)) = (self.thumb_drag, self.viewport) else {
            return Ok(());
        };
        if self.interaction.mode() != InteractionMode::DraggingThumb {
            return Ok(());
        }

        let (min_ms, max_ms) = drag.window_for_pointer(viewport, pointer_x_px, track_width_px);
        self.set_visible_window(min_ms, max_ms);
        Ok(())
    }

    /// Pointer release; clears the drag flag unconditionally.
    pub fn on_track_pointer_up(&mut self) {
        self.thumb_drag = None;
        self.interaction.end_drag();
    }

    /// Builds the frame for the current viewport, data, and chart area.
    ///
    /// Returns `Ok(None)` for degenerate input (no parseable timestamps):
    /// the widget declines to render rather than showing a misleading chart.
    pub fn frame(&mut self) -> TimelineResult<Option<TimelineFrame>> {
        let Some(viewport) = self.viewport else {
            return Ok(None);
        };

        let span = viewport.span();
        let coarse = coarse_step_for_span(span);
        let step_ms = refine_step_for_density(
            coarse,
            span,
            self.config.chart_area.width_px,
            self.config.binning_tuning,
        );

        let buckets = build_buckets(&self.index, viewport, step_ms, self.offset)?;
        let ticks = build_ticks(viewport, step_ms, self.offset)?;
        let thumb = thumb_geometry(viewport, self.config.min_thumb_width_percent);

        let frame = TimelineFrame {
            visible_range: viewport.visible_range(),
            global_range: viewport.global_range(),
            step_ms,
            buckets,
            ticks,
            thumb,
            chart_area: self.config.chart_area,
        };
        self.emit(TimelineEvent::FrameBuilt {
            bucket_count: frame.buckets.len(),
            step_ms,
        });
        Ok(Some(frame))
    }

    fn apply_command(&mut self, command: ViewportCommand) -> TimelineResult<()> {
        match command {
            ViewportCommand::Fit => {
                self.fit();
                Ok(())
            }
            ViewportCommand::Zoom { factor } => self.zoom(factor),
            ViewportCommand::Pan { direction, magnitude } => self.pan(direction, magnitude),
            ViewportCommand::Recenter { time_ms } => {
                self.recenter(time_ms);
                Ok(())
            }
            ViewportCommand::SetWindow { min_ms, max_ms } => {
                self.set_visible_window(min_ms, max_ms);
                Ok(())
            }
        }
    }

    fn commit(&mut self, viewport: TimeViewport, before: (i64, i64)) {
        self.viewport = Some(viewport);
        let (start_ms, end_ms) = viewport.visible_range();
        if (start_ms, end_ms) != before {
            trace!(start_ms, end_ms, "viewport committed");
            self.emit(TimelineEvent::VisibleRangeChanged { start_ms, end_ms });
        }
    }

    fn emit(&mut self, event: TimelineEvent) {
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }

    fn plugin_context(&self) -> PluginContext {
        PluginContext {
            chart_area: self.config.chart_area,
            visible_range: self.viewport.map(TimeViewport::visible_range),
            global_range: self.viewport.map(TimeViewport::global_range),
            timestamp_count: self.index.len(),
            interaction_mode: self.interaction.mode(),
        }
    }
}

fn validate_track(pointer_x_px: f64, track_width_px: f64) -> TimelineResult<()> {
    if !pointer_x_px.is_finite() || !track_width_px.is_finite() || track_width_px <= 0.0 {
        return Err(TimelineError::InvalidData(
            "track pointer coordinates must be finite with a positive width".to_owned(),
        ));
    }
    Ok(())
}
