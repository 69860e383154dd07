use super::workspace::StepWorkspace;
use crate::blur::{Blur, BoxBlur};
use crate::diagnostics::StepTrace;
use crate::error::FieldError;
use crate::image::f32::check_dimensions;
use crate::image::ImageF32;
use crate::normalize::{normalize, value_range};
use crate::pattern::PatternSet;
use log::debug;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Multi-scale activator/inhibitor step engine.
///
/// Stateless apart from its blur operator and scratch workspace; the field
/// and the pattern set are borrowed for the duration of a step, which also
/// rules out mutating either while a step is running.
#[derive(Debug, Default)]
pub struct TuringEngine<B: Blur = BoxBlur> {
    blur: B,
    workspace: StepWorkspace,
}

impl TuringEngine<BoxBlur> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: Blur> TuringEngine<B> {
    pub fn with_blur(blur: B) -> Self {
        Self {
            blur,
            workspace: StepWorkspace::default(),
        }
    }

    /// Advance `image` by one step of the pattern set and renormalize it.
    pub fn step(&mut self, patterns: &PatternSet, image: &mut ImageF32) -> Result<(), FieldError> {
        check_field(image)?;
        if !patterns.is_empty() {
            self.accumulate_variation(patterns, image);
            self.apply_variation(image);
        }
        let range = normalize(image);
        debug!(
            "TuringEngine::step scales={} {}x{} range={:?}",
            patterns.len(),
            image.w,
            image.h,
            range
        );
        Ok(())
    }

    /// Same as [`TuringEngine::step`] but also reports per-scale statistics
    /// and timings.
    pub fn step_traced(
        &mut self,
        patterns: &PatternSet,
        image: &mut ImageF32,
    ) -> Result<StepTrace, FieldError> {
        check_field(image)?;
        let start = Instant::now();
        let mut trace = StepTrace {
            width: image.w,
            height: image.h,
            scale_count: patterns.len(),
            ..Default::default()
        };

        if !patterns.is_empty() {
            let blur_start = Instant::now();
            self.accumulate_variation(patterns, image);
            trace.blur_ms = blur_start.elapsed().as_secs_f64() * 1000.0;
            trace.scale_wins = self.workspace.scale_wins(patterns.len());
            trace.raised = self.workspace.variation.iter().filter(|&&v| v > 0.0).count();
            self.apply_variation(image);
        }
        trace.pre_normalize = value_range(image.pixels());
        normalize(image);
        trace.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "TuringEngine::step_traced scales={} wins={:?} raised={} in {:.3} ms",
            trace.scale_count, trace.scale_wins, trace.raised, trace.elapsed_ms
        );
        Ok(trace)
    }

    /// Blur the untouched field at every scale and keep, per pixel, the
    /// variation of smallest magnitude together with the scale that
    /// produced it. Scale 0 seeds the record; later scales replace it only
    /// when strictly smaller, so ties stay with the lower index.
    fn accumulate_variation(&mut self, patterns: &PatternSet, image: &ImageF32) {
        let ws = &mut self.workspace;
        ws.ensure(image.w, image.h);
        ws.step_amounts.clear();
        ws.step_amounts
            .extend(patterns.iter().map(|p| p.step_amount()));

        for (i, spec) in patterns.iter().enumerate() {
            self.blur.blur(
                image,
                spec.activator_radius(),
                spec.weight(),
                &mut ws.activator,
            );
            self.blur.blur(
                image,
                spec.inhibitor_radius(),
                spec.weight(),
                &mut ws.inhibitor,
            );
            keep_minimal_variation(
                i == 0,
                i as u32,
                ws.activator.pixels(),
                ws.inhibitor.pixels(),
                &mut ws.variation,
                &mut ws.best_scale,
            );
        }
    }

    /// Nudge every pixel by the step amount of its best scale: up when the
    /// activator wins, down otherwise (including a zero variation).
    fn apply_variation(&self, image: &mut ImageF32) {
        let ws = &self.workspace;
        let amounts = ws.step_amounts.as_slice();
        let nudge = |((px, &v), &b): ((&mut f32, &f32), &u32)| {
            let amount = amounts[b as usize];
            if v > 0.0 {
                *px += amount;
            } else {
                *px -= amount;
            }
        };

        #[cfg(feature = "parallel")]
        {
            image
                .pixels_mut()
                .par_iter_mut()
                .zip(ws.variation.par_iter())
                .zip(ws.best_scale.par_iter())
                .for_each(nudge);
        }
        #[cfg(not(feature = "parallel"))]
        {
            image
                .pixels_mut()
                .iter_mut()
                .zip(ws.variation.iter())
                .zip(ws.best_scale.iter())
                .for_each(nudge);
        }
    }

    #[cfg(test)]
    pub(crate) fn workspace(&self) -> &StepWorkspace {
        &self.workspace
    }
}

fn keep_minimal_variation(
    seed: bool,
    scale: u32,
    activator: &[f32],
    inhibitor: &[f32],
    variation: &mut [f32],
    best_scale: &mut [u32],
) {
    let update = |(((v, b), &a), &i): (((&mut f32, &mut u32), &f32), &f32)| {
        let candidate = a - i;
        if seed || candidate.abs() < v.abs() {
            *v = candidate;
            *b = scale;
        }
    };

    #[cfg(feature = "parallel")]
    {
        variation
            .par_iter_mut()
            .zip(best_scale.par_iter_mut())
            .zip(activator.par_iter())
            .zip(inhibitor.par_iter())
            .for_each(update);
    }
    #[cfg(not(feature = "parallel"))]
    {
        variation
            .iter_mut()
            .zip(best_scale.iter_mut())
            .zip(activator.iter())
            .zip(inhibitor.iter())
            .for_each(update);
    }
}

fn check_field(image: &ImageF32) -> Result<(), FieldError> {
    check_dimensions(image.w, image.h)?;
    if image.stride != image.w || image.data.len() < image.w * image.h {
        return Err(FieldError::InvalidDimension {
            width: image.w,
            height: image.h,
        });
    }
    Ok(())
}
