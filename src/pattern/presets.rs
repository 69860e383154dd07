//! Built-in scale catalog, from coarse to fine.
//!
//! Growing a set by one scale appends the preset at index `len()`, so the
//! catalog length doubles as the default maximum scale count.
use super::PatternSpec;

/// (activator radius, inhibitor radius, weight, symmetry order, step amount)
const PRESET_TABLE: [(u32, u32, u32, u32, f32); 5] = [
    (50, 100, 1, 2, 0.05),
    (25, 50, 1, 1, 0.04),
    (10, 20, 1, 4, 0.03),
    (5, 10, 1, 1, 0.02),
    (1, 2, 1, 1, 0.01),
];

pub const PRESET_COUNT: usize = PRESET_TABLE.len();

/// Preset scale at `index`, or `None` past the end of the catalog.
pub fn preset(index: usize) -> Option<PatternSpec> {
    let &(act, inh, wt, sym, sa) = PRESET_TABLE.get(index)?;
    PatternSpec::new(act, inh, wt, sym, sa).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_is_valid() {
        for i in 0..PRESET_COUNT {
            let p = preset(i).expect("preset must validate");
            assert!(p.activator_radius() < p.inhibitor_radius());
        }
        assert!(preset(PRESET_COUNT).is_none());
    }
}
