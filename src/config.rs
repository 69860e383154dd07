//! JSON runtime configuration for the headless runner.
//!
//! ```json
//! {
//!   "width": 256,
//!   "height": 256,
//!   "seed": 7,
//!   "ticks": 200,
//!   "maxScales": 5,
//!   "initialScales": 3,
//!   "traceEvery": 10,
//!   "resetEvery": 50,
//!   "output": { "summaryJson": "out/summary.json" }
//! }
//! ```
//!
//! `patterns` may replace `initialScales` with an explicit list of scales.
//! `resetEvery` refills the field with fresh random samples every N ticks;
//! the runner counts these in the summary's `resets`.
use crate::controller::MIN_DIMENSION;
use crate::pattern::{PatternSet, PatternSpec, MAX_SCALES};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Largest `maxScales` a config may ask for.
pub const SCALE_LIMIT: usize = 64;

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunConfig {
    pub width: usize,
    pub height: usize,
    /// Fixed seed for the initial field; entropy when absent.
    pub seed: Option<u64>,
    pub ticks: usize,
    pub max_scales: usize,
    /// Number of catalog presets to start with.
    pub initial_scales: usize,
    /// Explicit scales; overrides `initial_scales` when non-empty.
    pub patterns: Vec<PatternSpec>,
    /// Record a step trace every N ticks (0 disables tracing).
    pub trace_every: usize,
    /// Reset the field every N ticks (0 never resets).
    pub reset_every: usize,
    pub output: OutputConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    pub summary_json: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            seed: None,
            ticks: 100,
            max_scales: MAX_SCALES,
            initial_scales: 1,
            patterns: Vec::new(),
            trace_every: 10,
            reset_every: 0,
            output: OutputConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(format!(
                "Field must be at least {MIN_DIMENSION}x{MIN_DIMENSION}, got {}x{}",
                self.width, self.height
            ));
        }
        if self.max_scales == 0 || self.max_scales > SCALE_LIMIT {
            return Err(format!(
                "maxScales must be in 1..={SCALE_LIMIT}, got {}",
                self.max_scales
            ));
        }
        if self.patterns.is_empty() && self.initial_scales == 0 {
            return Err("At least one initial scale is required".to_string());
        }
        Ok(())
    }

    /// Pattern set described by this config.
    pub fn pattern_set(&self) -> Result<PatternSet, String> {
        if self.patterns.is_empty() {
            let mut set = PatternSet::with_capacity_limit(self.max_scales);
            for _ in 0..self.initial_scales {
                set.add_next_preset()
                    .map_err(|e| format!("Invalid initialScales {}: {e}", self.initial_scales))?;
            }
            Ok(set)
        } else {
            PatternSet::from_specs(self.patterns.clone(), self.max_scales)
                .map_err(|e| format!("Invalid patterns: {e}"))
        }
    }
}

pub fn load_config(path: &Path) -> Result<RunConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RunConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_sections() {
        let cfg: RunConfig = serde_json::from_str(r#"{"width": 120, "height": 140}"#).unwrap();
        assert_eq!((cfg.width, cfg.height), (120, 140));
        assert_eq!(cfg.max_scales, MAX_SCALES);
        assert!(cfg.output.summary_json.is_none());
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.pattern_set().unwrap().len(), 1);
    }

    #[test]
    fn explicit_patterns_override_presets() {
        let cfg: RunConfig = serde_json::from_str(
            r#"{
                "initialScales": 4,
                "patterns": [
                    {"activatorRadius": 3, "inhibitorRadius": 6, "stepAmount": 0.02},
                    {"activatorRadius": 1, "inhibitorRadius": 2, "weight": 2, "stepAmount": 0.01}
                ]
            }"#,
        )
        .unwrap();
        let set = cfg.pattern_set().unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).map(|p| p.weight()), Some(2));
    }

    #[test]
    fn small_fields_and_too_many_presets_are_rejected() {
        let cfg = RunConfig {
            width: 50,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = RunConfig {
            initial_scales: MAX_SCALES + 1,
            ..Default::default()
        };
        assert!(cfg.pattern_set().is_err());
    }

    #[test]
    fn out_of_range_max_scales_is_rejected() {
        let cfg: RunConfig = serde_json::from_str(
            r#"{"width": 128, "height": 128, "maxScales": 2305843009213693951}"#,
        )
        .unwrap();
        assert!(cfg.validate().is_err());
        assert_eq!(cfg.pattern_set().unwrap().len(), 1);

        let cfg = RunConfig {
            max_scales: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = RunConfig {
            max_scales: SCALE_LIMIT,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn reset_interval_is_read() {
        let cfg: RunConfig = serde_json::from_str(r#"{"resetEvery": 25}"#).unwrap();
        assert_eq!(cfg.reset_every, 25);
        assert_eq!(RunConfig::default().reset_every, 0);
    }

    #[test]
    fn invalid_pattern_in_config_fails_to_parse() {
        let res = serde_json::from_str::<RunConfig>(
            r#"{"patterns": [{"activatorRadius": 0, "inhibitorRadius": 2, "stepAmount": 0.1}]}"#,
        );
        assert!(res.is_err());
    }
}
