//! Scale descriptors and the ordered, bounded set the engine iterates.

pub mod presets;
mod set;
mod spec;

pub use presets::{preset, PRESET_COUNT};
pub use set::{PatternSet, MAX_SCALES, MIN_SCALES};
pub use spec::PatternSpec;
