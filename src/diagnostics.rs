//! Step-level diagnostics returned by [`TuringEngine::step_traced`] and
//! aggregated by the headless runner.
//!
//! [`TuringEngine::step_traced`]: crate::engine::TuringEngine::step_traced
use crate::normalize::ValueRange;
use serde::{Deserialize, Serialize};

/// What a single step did.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTrace {
    pub width: usize,
    pub height: usize,
    pub scale_count: usize,
    /// Pixels whose minimal variation came from each scale, by index.
    pub scale_wins: Vec<usize>,
    /// Pixels that moved up (variation > 0); the rest moved down.
    pub raised: usize,
    /// Field range after the update and before normalization.
    pub pre_normalize: Option<ValueRange>,
    pub blur_ms: f64,
    pub elapsed_ms: f64,
}

impl StepTrace {
    /// Index of the scale that won the most pixels (lowest index on ties).
    pub fn dominant_scale(&self) -> Option<usize> {
        self.scale_wins
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, usize)>, (i, &n)| match best {
                Some((_, m)) if m >= n => best,
                _ => Some((i, n)),
            })
            .map(|(i, _)| i)
    }
}

/// Aggregate over a run of steps.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub width: usize,
    pub height: usize,
    pub ticks: usize,
    pub resets: usize,
    pub final_scale_count: usize,
    pub total_ms: f64,
    pub mean_step_ms: f64,
    pub traces: Vec<StepTrace>,
}

impl RunSummary {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn record(&mut self, elapsed_ms: f64) {
        self.ticks += 1;
        self.total_ms += elapsed_ms;
        self.mean_step_ms = self.total_ms / self.ticks as f64;
    }
}
