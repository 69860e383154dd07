#![doc = include_str!("../README.md")]

// Public modules
pub mod blur;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod image;
pub mod init;
pub mod io;
pub mod normalize;
pub mod pattern;

// --- High-level re-exports -------------------------------------------------

pub use crate::controller::{Command, Controller};
pub use crate::engine::TuringEngine;
pub use crate::error::{CapacityError, FieldError};
pub use crate::image::ImageF32;
pub use crate::normalize::normalize;
pub use crate::pattern::{PatternSet, PatternSpec};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use turing_field::prelude::*;
///
/// # fn main() -> Result<(), FieldError> {
/// let mut image = ImageF32::try_new(256, 256)?;
/// FieldInitializer::seeded(1).init(&mut image);
///
/// let patterns = PatternSet::from_presets(3);
/// let mut engine = TuringEngine::new();
/// for _ in 0..50 {
///     engine.step(&patterns, &mut image)?;
/// }
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::init::FieldInitializer;
    pub use crate::{FieldError, ImageF32, PatternSet, PatternSpec, TuringEngine};
}
