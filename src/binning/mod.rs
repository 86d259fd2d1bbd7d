pub mod histogram;
pub mod step;
pub mod ticks;

pub use histogram::build_buckets;
pub use step::{BinningTuning, coarse_step_for_span, refine_step_for_density};
pub use ticks::build_ticks;
