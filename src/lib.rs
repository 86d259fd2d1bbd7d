//! timeline-rs: headless engine for log timeline widgets.
//!
//! This crate owns the deterministic core of a log-histogram timeline:
//! timestamp extraction from loosely-structured records, the visible time
//! window with pan/zoom/drag semantics, calendar-aligned adaptive bucketing,
//! tick labels and scrollbar thumb geometry. Rendering is the host's job.

pub mod api;
pub mod binning;
pub mod core;
pub mod error;
pub mod extensions;
pub mod extract;
pub mod interaction;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig, TimelineFrame};
pub use error::{TimelineError, TimelineResult};
