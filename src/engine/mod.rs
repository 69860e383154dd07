//! Multi-scale Turing step engine.
//!
//! Overview
//! - For every scale of the pattern set, blur the field at the activator
//!   and inhibitor radii and take their difference (the variation).
//! - Per pixel, keep the variation of smallest magnitude across scales and
//!   remember which scale produced it (the best-scale map). Scale 0 seeds
//!   the record; ties keep the lower index.
//! - Move each pixel up by its best scale's step amount when the variation
//!   is positive, down otherwise, then renormalize the field to `[0, 1]`.
//!
//! Key Ideas
//! - All blurs of a step read the same, untouched field; the update is
//!   applied only once every scale has been compared.
//! - Scales run sequentially; per-pixel comparison and update run in
//!   parallel under the `parallel` feature.
//! - Scratch buffers live in a workspace owned by the engine and are reused
//!   between steps.

mod step;
mod workspace;

pub use step::TuringEngine;
