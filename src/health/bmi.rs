//! BMI calculator
//!
//! `BmiMode::AsEntered` divides the weight value by height in meters squared
//! without looking at the weight unit, so a weight entered in pounds yields an
//! inflated BMI. `BmiMode::Metric` converts pounds to kilograms first.

use serde::{Deserialize, Serialize};

use crate::measure::{Height, Weight};
use crate::models::{BmiCategory, BmiReading};

/// How the weight value is read by the BMI formula
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiMode {
    /// Weight value used as-is, whatever its unit
    #[default]
    AsEntered,
    /// Weight converted to kilograms before dividing
    Metric,
}

impl BmiMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiMode::AsEntered => "as_entered",
            BmiMode::Metric => "metric",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "as_entered" | "literal" | "raw" => Some(BmiMode::AsEntered),
            "metric" | "converted" | "corrected" => Some(BmiMode::Metric),
            _ => None,
        }
    }
}

/// Round half away from zero to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute BMI and its category
///
/// Height must be non-zero for a meaningful result; the questionnaire only
/// calls this once height has been entered. A zero height produces an
/// infinite BMI classified as Obese rather than a panic.
pub fn calculate_bmi(weight: &Weight, height: &Height, mode: BmiMode) -> BmiReading {
    let weight_value = match mode {
        BmiMode::AsEntered => weight.value,
        BmiMode::Metric => weight.to_kilograms(),
    };
    let height_m = height.to_meters();

    let value = round_to_tenth(weight_value / (height_m * height_m));

    BmiReading {
        value,
        category: BmiCategory::from_bmi(value),
    }
}
