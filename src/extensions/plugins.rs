use serde::{Deserialize, Serialize};

use crate::core::types::ChartArea;
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub chart_area: ChartArea,
    pub visible_range: Option<(i64, i64)>,
    pub global_range: Option<(i64, i64)>,
    pub timestamp_count: usize,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimelineEvent {
    RecordsUpdated { indexed: usize, dropped: usize },
    VisibleRangeChanged { start_ms: i64, end_ms: i64 },
    RefreshRequested,
    FrameBuilt { bucket_count: usize, step_ms: i64 },
}

/// Extension hook interface for bounded custom logic.
///
/// The engine keeps an explicit subscriber list and notifies it on state
/// transitions; plugins observe events and read context without mutating
/// engine internals.
pub trait TimelinePlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: TimelineEvent, context: PluginContext);
}
