//! Owner of the field, the pattern set and the engine.
//!
//! External requests (ticks, scale changes, resets) arrive as [`Command`]s
//! and are applied one at a time, so a pattern-set mutation can never
//! overlap a step.
use crate::blur::{Blur, BoxBlur};
use crate::diagnostics::StepTrace;
use crate::engine::TuringEngine;
use crate::error::{CapacityError, FieldError};
use crate::image::ImageF32;
use crate::init::FieldInitializer;
use crate::pattern::{PatternSet, PatternSpec};
use log::{info, warn};

/// Smallest field edge accepted by the runner config. The engine itself
/// works on any non-empty field.
pub const MIN_DIMENSION: usize = 100;

/// Requests the controller understands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Advance the field by one step.
    Tick,
    /// Append the next preset scale.
    AddScale,
    /// Append an explicit scale.
    AddSpec(PatternSpec),
    /// Drop the last scale.
    RemoveScale,
    /// Refill the field with fresh random samples.
    Reset,
}

pub struct Controller<B: Blur = BoxBlur> {
    image: ImageF32,
    patterns: PatternSet,
    engine: TuringEngine<B>,
    initializer: FieldInitializer,
}

impl Controller<BoxBlur> {
    pub fn new(
        width: usize,
        height: usize,
        patterns: PatternSet,
        initializer: FieldInitializer,
    ) -> Result<Self, FieldError> {
        Self::with_engine(width, height, patterns, initializer, TuringEngine::new())
    }
}

impl<B: Blur> Controller<B> {
    pub fn with_engine(
        width: usize,
        height: usize,
        patterns: PatternSet,
        mut initializer: FieldInitializer,
        engine: TuringEngine<B>,
    ) -> Result<Self, FieldError> {
        let mut image = ImageF32::try_new(width, height)?;
        initializer.init(&mut image);
        info!(
            "Controller: {width}x{height} field with {} scale(s)",
            patterns.len()
        );
        Ok(Self {
            image,
            patterns,
            engine,
            initializer,
        })
    }

    /// Apply one command. Rejected scale changes leave the set untouched and
    /// come back as [`FieldError::Capacity`].
    pub fn dispatch(&mut self, command: Command) -> Result<(), FieldError> {
        match command {
            Command::Tick => self.tick(),
            Command::AddScale => {
                let res = self.patterns.add_next_preset();
                self.log_scale_change("add", res)
            }
            Command::AddSpec(spec) => {
                let res = self.patterns.add(spec);
                self.log_scale_change("add", res)
            }
            Command::RemoveScale => {
                let res = self.patterns.remove().map(|_| ());
                self.log_scale_change("remove", res)
            }
            Command::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    pub fn tick(&mut self) -> Result<(), FieldError> {
        self.engine.step(&self.patterns, &mut self.image)
    }

    pub fn tick_traced(&mut self) -> Result<StepTrace, FieldError> {
        self.engine.step_traced(&self.patterns, &mut self.image)
    }

    pub fn reset(&mut self) {
        self.initializer.init(&mut self.image);
        info!("Controller: field reset");
    }

    pub fn image(&self) -> &ImageF32 {
        &self.image
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    fn log_scale_change(
        &self,
        what: &str,
        res: Result<(), CapacityError>,
    ) -> Result<(), FieldError> {
        match res {
            Ok(()) => {
                info!("Controller: {what} scale -> {} scale(s)", self.patterns.len());
                Ok(())
            }
            Err(err) => {
                warn!("Controller: {what} scale rejected: {err}");
                Err(err.into())
            }
        }
    }
}
