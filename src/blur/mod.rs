//! Local averaging used to derive activator and inhibitor fields.
//!
//! The engine only depends on the [`Blur`] trait. The default
//! [`BoxBlur`] is a separable running-sum box average:
//!
//! - Horizontal pass then vertical pass, each O(W·H) regardless of radius.
//! - Border samples clamp to the field extents (replicate border), for both
//!   the activator and the inhibitor call of a scale.
//! - The averaged value is multiplied by the scale weight, so weight scales
//!   the variation magnitude a scale contributes to the cross-scale
//!   comparison. A weight of 0 produces an all-zero field.
//! - Accumulation runs in f64 to keep the sliding sums from drifting on
//!   large radii.

mod box_filter;

pub use box_filter::BoxBlur;

use crate::image::ImageF32;

/// Trait implemented by blur operators consumed by the step engine.
///
/// Implementations must be deterministic and write a field of the same
/// dimensions as `src` into `out`, reshaping `out` if it differs.
pub trait Blur {
    fn blur(&mut self, src: &ImageF32, radius: u32, weight: u32, out: &mut ImageF32);
}

impl<B: Blur + ?Sized> Blur for Box<B> {
    fn blur(&mut self, src: &ImageF32, radius: u32, weight: u32, out: &mut ImageF32) {
        (**self).blur(src, radius, weight, out)
    }
}
