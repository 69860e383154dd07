//! In-place min/max rescale of a field to `[0, 1]`.
//!
//! A uniform field (max == min) is left untouched instead of dividing by a
//! zero range, so values stay finite across steps.
use crate::image::ImageF32;
use log::debug;
use serde::{Deserialize, Serialize};

/// Minimum and maximum observed in a field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.span() > 0.0)
    }
}

/// Single pass min/max over `values`; `None` for an empty slice.
pub fn value_range(values: &[f32]) -> Option<ValueRange> {
    let (&first, rest) = values.split_first()?;
    let (min, max) = rest
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    Some(ValueRange { min, max })
}

/// Rescale `image` so its minimum maps to 0 and its maximum to 1.
///
/// Returns the range observed before rescaling.
pub fn normalize(image: &mut ImageF32) -> Option<ValueRange> {
    let pixels = image.pixels_mut();
    let range = value_range(pixels)?;
    if range.is_degenerate() {
        debug!(
            "normalize: uniform field at {:.6}, leaving unchanged",
            range.min
        );
        return Some(range);
    }

    let (min, span) = (range.min, range.span());
    for px in pixels.iter_mut() {
        *px = (*px - min) / span;
    }
    Some(range)
}
