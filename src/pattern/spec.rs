use crate::error::FieldError;
use serde::{Deserialize, Serialize};

/// One scale of pattern formation.
///
/// Fields are private so a `PatternSpec` can only exist in a validated
/// state; deserialization goes through [`PatternSpec::new`] as well.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPatternSpec", rename_all = "camelCase")]
pub struct PatternSpec {
    activator_radius: u32,
    inhibitor_radius: u32,
    weight: u32,
    /// Consumed by symmetry enforcement downstream; the engine ignores it.
    symmetry_order: u32,
    step_amount: f32,
}

impl PatternSpec {
    pub fn new(
        activator_radius: u32,
        inhibitor_radius: u32,
        weight: u32,
        symmetry_order: u32,
        step_amount: f32,
    ) -> Result<Self, FieldError> {
        if activator_radius == 0 || inhibitor_radius == 0 {
            return Err(FieldError::InvalidPattern(format!(
                "radii must be positive (activator={activator_radius}, inhibitor={inhibitor_radius})"
            )));
        }
        if symmetry_order == 0 {
            return Err(FieldError::InvalidPattern(
                "symmetry order must be positive".to_string(),
            ));
        }
        if !(step_amount > 0.0 && step_amount < 1.0) {
            return Err(FieldError::InvalidPattern(format!(
                "step amount must lie in (0, 1), got {step_amount}"
            )));
        }
        Ok(Self {
            activator_radius,
            inhibitor_radius,
            weight,
            symmetry_order,
            step_amount,
        })
    }

    #[inline]
    pub fn activator_radius(&self) -> u32 {
        self.activator_radius
    }
    #[inline]
    pub fn inhibitor_radius(&self) -> u32 {
        self.inhibitor_radius
    }
    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }
    #[inline]
    pub fn symmetry_order(&self) -> u32 {
        self.symmetry_order
    }
    #[inline]
    pub fn step_amount(&self) -> f32 {
        self.step_amount
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPatternSpec {
    activator_radius: u32,
    inhibitor_radius: u32,
    #[serde(default = "default_weight")]
    weight: u32,
    #[serde(default = "default_symmetry")]
    symmetry_order: u32,
    step_amount: f32,
}

fn default_weight() -> u32 {
    1
}

fn default_symmetry() -> u32 {
    1
}

impl TryFrom<RawPatternSpec> for PatternSpec {
    type Error = FieldError;

    fn try_from(raw: RawPatternSpec) -> Result<Self, Self::Error> {
        PatternSpec::new(
            raw.activator_radius,
            raw.inhibitor_radius,
            raw.weight,
            raw.symmetry_order,
            raw.step_amount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_values() {
        assert!(PatternSpec::new(0, 2, 1, 1, 0.05).is_err());
        assert!(PatternSpec::new(1, 0, 1, 1, 0.05).is_err());
        assert!(PatternSpec::new(1, 2, 1, 0, 0.05).is_err());
        assert!(PatternSpec::new(1, 2, 1, 1, 0.0).is_err());
        assert!(PatternSpec::new(1, 2, 1, 1, 1.0).is_err());
        assert!(PatternSpec::new(1, 2, 1, 1, f32::NAN).is_err());
        assert!(PatternSpec::new(1, 2, 0, 1, 0.5).is_ok());
    }

    #[test]
    fn deserialization_validates() {
        let ok: PatternSpec = serde_json::from_str(
            r#"{"activatorRadius": 5, "inhibitorRadius": 10, "stepAmount": 0.02}"#,
        )
        .unwrap();
        assert_eq!(ok.weight(), 1);
        assert_eq!(ok.symmetry_order(), 1);
        assert_eq!(ok.inhibitor_radius(), 10);

        let bad = serde_json::from_str::<PatternSpec>(
            r#"{"activatorRadius": 5, "inhibitorRadius": 10, "stepAmount": 1.5}"#,
        );
        assert!(bad.is_err());
    }
}
