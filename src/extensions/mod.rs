mod plugins;

pub use plugins::{PluginContext, TimelineEvent, TimelinePlugin};
