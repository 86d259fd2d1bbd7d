pub mod calendar;
pub mod index;
pub mod scale;
pub mod scrollbar;
pub mod types;
pub mod viewport;

pub use calendar::UtcOffset;
pub use index::TimestampIndex;
pub use scale::TimePixelMap;
pub use scrollbar::ThumbGeometry;
pub use types::{Bucket, ChartArea, TimeTick};
pub use viewport::{PanDirection, TimeViewport};
