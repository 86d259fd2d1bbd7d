mod engine;
mod engine_config;
mod frame;

pub use engine::TimelineEngine;
pub use engine_config::TimelineEngineConfig;
pub use frame::TimelineFrame;
