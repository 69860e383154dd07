//! Random initial fields.
//!
//! The generator is seeded once when the initializer is built. Repeated
//! resets draw fresh samples from the same stream, which gives variety
//! between resets without reseeding.
use crate::image::ImageF32;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Debug)]
pub struct FieldInitializer {
    rng: StdRng,
}

impl Default for FieldInitializer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl FieldInitializer {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic initializer for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fill every pixel with an independent uniform sample in `[0, 1)`.
    pub fn init(&mut self, image: &mut ImageF32) {
        for px in image.pixels_mut() {
            *px = self.rng.random::<f32>();
        }
    }
}
