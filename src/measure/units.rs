//! Unit types and conversion constants
//!
//! Height and weight are kept exactly as entered (value plus unit). Conversion
//! to metric happens only when a calculation asks for it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Conversion Constants
// ============================================================================

/// Meters per foot
pub const M_PER_FT: f64 = 0.3048;
/// Centimeters per foot
pub const CM_PER_FT: f64 = 30.48;
/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;
/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Unit parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("Unknown height unit '{0}' (expected cm or ft)")]
    UnknownHeightUnit(String),

    #[error("Unknown weight unit '{0}' (expected kg or lbs)")]
    UnknownWeightUnit(String),
}

/// Unit of a height reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeightUnit {
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "ft")]
    Feet,
}

impl HeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeightUnit::Centimeters => "cm",
            HeightUnit::Feet => "ft",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, UnitError> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(HeightUnit::Centimeters)
            }
            "ft" | "foot" | "feet" => Ok(HeightUnit::Feet),
            other => Err(UnitError::UnknownHeightUnit(other.to_string())),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HeightUnit::Centimeters => "Centimeters",
            HeightUnit::Feet => "Feet",
        }
    }

    /// Factor that turns a value in this unit into meters
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            HeightUnit::Centimeters => 1.0 / CM_PER_M,
            HeightUnit::Feet => M_PER_FT,
        }
    }
}

/// Unit of a body weight reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "lbs")]
    Pounds,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lbs",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, UnitError> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pounds),
            other => Err(UnitError::UnknownWeightUnit(other.to_string())),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "Kilograms",
            WeightUnit::Pounds => "Pounds",
        }
    }

    /// Factor that turns a value in this unit into kilograms
    pub fn kilograms_per_unit(&self) -> f64 {
        match self {
            WeightUnit::Kilograms => 1.0,
            WeightUnit::Pounds => KG_PER_LB,
        }
    }
}

/// A height reading as entered
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Height {
    pub value: f64,
    pub unit: HeightUnit,
}

impl Height {
    pub fn new(value: f64, unit: HeightUnit) -> Self {
        Self { value, unit }
    }

    pub fn centimeters(value: f64) -> Self {
        Self::new(value, HeightUnit::Centimeters)
    }

    pub fn feet(value: f64) -> Self {
        Self::new(value, HeightUnit::Feet)
    }

    pub fn to_meters(&self) -> f64 {
        self.value * self.unit.meters_per_unit()
    }

    pub fn to_centimeters(&self) -> f64 {
        match self.unit {
            HeightUnit::Centimeters => self.value,
            HeightUnit::Feet => self.value * CM_PER_FT,
        }
    }

    pub fn is_set(&self) -> bool {
        self.value > 0.0
    }
}

impl std::fmt::Display for Height {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit.as_str())
    }
}

/// A weight reading as entered (current or target)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}

impl Weight {
    pub fn new(value: f64, unit: WeightUnit) -> Self {
        Self { value, unit }
    }

    pub fn kilograms(value: f64) -> Self {
        Self::new(value, WeightUnit::Kilograms)
    }

    pub fn pounds(value: f64) -> Self {
        Self::new(value, WeightUnit::Pounds)
    }

    pub fn to_kilograms(&self) -> f64 {
        self.value * self.unit.kilograms_per_unit()
    }

    pub fn is_set(&self) -> bool {
        self.value > 0.0
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_unit_aliases() {
        assert_eq!(HeightUnit::from_str("cm"), Ok(HeightUnit::Centimeters));
        assert_eq!(HeightUnit::from_str(" Feet "), Ok(HeightUnit::Feet));
        assert_eq!(HeightUnit::from_str("ft"), Ok(HeightUnit::Feet));
        assert!(matches!(
            HeightUnit::from_str("in"),
            Err(UnitError::UnknownHeightUnit(_))
        ));
    }

    #[test]
    fn test_weight_unit_aliases() {
        assert_eq!(WeightUnit::from_str("KG"), Ok(WeightUnit::Kilograms));
        assert_eq!(WeightUnit::from_str("lb"), Ok(WeightUnit::Pounds));
        assert_eq!(WeightUnit::from_str("lbs"), Ok(WeightUnit::Pounds));
        assert!(WeightUnit::from_str("stone").is_err());
    }

    #[test]
    fn test_height_to_meters() {
        assert!((Height::centimeters(175.0).to_meters() - 1.75).abs() < 0.001);
        assert!((Height::feet(6.0).to_meters() - 1.8288).abs() < 0.001);
        assert!((Height::feet(5.5).to_centimeters() - 167.64).abs() < 0.001);
    }

    #[test]
    fn test_weight_to_kilograms() {
        assert!((Weight::kilograms(70.0).to_kilograms() - 70.0).abs() < 0.001);
        assert!((Weight::pounds(150.0).to_kilograms() - 68.0388).abs() < 0.001);
    }

    #[test]
    fn test_units_serialize_as_entered() {
        let json = serde_json::to_string(&Weight::pounds(150.0)).unwrap();
        assert_eq!(json, r#"{"value":150.0,"unit":"lbs"}"#);

        let height: Height = serde_json::from_str(r#"{"value":5.9,"unit":"ft"}"#).unwrap();
        assert_eq!(height.unit, HeightUnit::Feet);
    }

    #[test]
    fn test_defaults_are_unset_metric() {
        let height = Height::default();
        let weight = Weight::default();
        assert_eq!(height.unit, HeightUnit::Centimeters);
        assert_eq!(weight.unit, WeightUnit::Kilograms);
        assert!(!height.is_set());
        assert!(!weight.is_set());
    }
}
