use super::presets::{preset, PRESET_COUNT};
use super::PatternSpec;
use crate::error::{CapacityError, FieldError};

/// Fewest scales a set may shrink to through [`PatternSet::remove`].
pub const MIN_SCALES: usize = 1;
/// Default upper bound on the number of scales.
pub const MAX_SCALES: usize = PRESET_COUNT;

/// Ordered list of scales driving the step engine.
///
/// Order matters: index 0 seeds the per-pixel comparison and ties resolve to
/// the lower index. The set only grows at the end and shrinks from the end.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternSet {
    patterns: Vec<PatternSpec>,
    max: usize,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::from_presets(MIN_SCALES)
    }
}

impl PatternSet {
    /// Empty set with the default capacity. Stepping an empty set only
    /// normalizes the field.
    pub fn new() -> Self {
        Self::with_capacity_limit(MAX_SCALES)
    }

    /// Empty set accepting up to `max` scales (at least [`MIN_SCALES`]).
    pub fn with_capacity_limit(max: usize) -> Self {
        let max = max.max(MIN_SCALES);
        Self {
            patterns: Vec::with_capacity(max.min(PRESET_COUNT)),
            max,
        }
    }

    /// Set holding the first `count` presets (clamped to the catalog).
    pub fn from_presets(count: usize) -> Self {
        let mut set = Self::new();
        set.patterns
            .extend((0..count.min(PRESET_COUNT)).filter_map(preset));
        set
    }

    /// Build a set from explicit specs. Fails if more than `max` are given.
    pub fn from_specs(specs: Vec<PatternSpec>, max: usize) -> Result<Self, FieldError> {
        let mut set = Self::with_capacity_limit(max);
        if specs.len() > set.max {
            return Err(CapacityError::Full { max: set.max }.into());
        }
        set.patterns = specs;
        Ok(set)
    }

    /// Append `spec`, unless the set is already at its maximum.
    pub fn add(&mut self, spec: PatternSpec) -> Result<(), CapacityError> {
        if self.patterns.len() >= self.max {
            return Err(CapacityError::Full { max: self.max });
        }
        self.patterns.push(spec);
        Ok(())
    }

    /// Append the catalog preset matching the current length.
    pub fn add_next_preset(&mut self) -> Result<(), CapacityError> {
        match preset(self.patterns.len()) {
            Some(spec) => self.add(spec),
            None => Err(CapacityError::Full {
                max: self.max.min(PRESET_COUNT),
            }),
        }
    }

    /// Drop the last scale, unless only [`MIN_SCALES`] remain.
    pub fn remove(&mut self) -> Result<PatternSpec, CapacityError> {
        if self.patterns.len() <= MIN_SCALES {
            return Err(CapacityError::AtMinimum { min: MIN_SCALES });
        }
        self.patterns
            .pop()
            .ok_or(CapacityError::AtMinimum { min: MIN_SCALES })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[inline]
    pub fn max_scales(&self) -> usize {
        self.max
    }

    #[inline]
    pub fn as_slice(&self) -> &[PatternSpec] {
        &self.patterns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatternSpec> {
        self.patterns.iter()
    }

    pub fn get(&self, index: usize) -> Option<&PatternSpec> {
        self.patterns.get(index)
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a PatternSpec;
    type IntoIter = std::slice::Iter<'a, PatternSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
