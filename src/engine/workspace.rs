//! Scratch buffers reused across steps.
//!
//! The engine keeps activator/inhibitor fields, the per-pixel minimal
//! variation and the best-scale map here so a step on a fixed-size field
//! never allocates. Buffers are reshaped only when the field dimensions
//! change.
use crate::image::ImageF32;
use log::debug;

#[derive(Debug, Default)]
pub(crate) struct StepWorkspace {
    pub(crate) activator: ImageF32,
    pub(crate) inhibitor: ImageF32,
    pub(crate) variation: Vec<f32>,
    pub(crate) best_scale: Vec<u32>,
    pub(crate) step_amounts: Vec<f32>,
}

impl StepWorkspace {
    /// Size every buffer for a `w × h` field. Returns `true` if anything had
    /// to be reallocated.
    pub(crate) fn ensure(&mut self, w: usize, h: usize) -> bool {
        let len = w * h;
        let resized =
            self.activator.w != w || self.activator.h != h || self.variation.len() != len;
        if resized {
            debug!("StepWorkspace: allocating scratch buffers for {w}x{h}");
            self.activator.ensure_shape(w, h);
            self.inhibitor.ensure_shape(w, h);
            self.variation.clear();
            self.variation.resize(len, 0.0);
            self.best_scale.clear();
            self.best_scale.resize(len, 0);
        }
        resized
    }

    /// Number of pixels currently assigned to each scale index.
    pub(crate) fn scale_wins(&self, scales: usize) -> Vec<usize> {
        let mut wins = vec![0usize; scales];
        for &b in &self.best_scale {
            if let Some(slot) = wins.get_mut(b as usize) {
                *slot += 1;
            }
        }
        wins
    }
}
