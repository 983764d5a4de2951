//! Health profile model
//!
//! The record built up by the questionnaire and handed to the host once the
//! last step is confirmed.

use serde::{Deserialize, Serialize};

use super::options::FOOD_ALLERGY_CATEGORY;
use super::selection::{HealthConditions, Selection};
use crate::measure::{Height, Weight};

/// BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Lower bounds are inclusive: 18.5 is Normal, 25 Overweight, 30 Obese
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "underweight" => Some(BmiCategory::Underweight),
            "normal" | "healthy" => Some(BmiCategory::Normal),
            "overweight" => Some(BmiCategory::Overweight),
            "obese" | "obesity" => Some(BmiCategory::Obese),
            _ => None,
        }
    }
}

/// A computed BMI with its category. Both are stored together so one can
/// never be present without the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    /// Rounded to one decimal place
    pub value: f64,
    pub category: BmiCategory,
}

/// Aggregate of user-entered physical and medical attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "ProfileRecord", try_from = "ProfileRecord")]
pub struct HealthProfile {
    /// Years; 0 means unset
    pub age: u32,
    pub height: Height,
    pub weight: Weight,
    pub target_weight: Weight,
    /// Absent until basic information has been confirmed
    pub bmi: Option<BmiReading>,
    pub allergies: Selection,
    /// Only meaningful while `allergies` contains "Food". Not cleared when
    /// "Food" is unchecked.
    pub food_allergies: Selection,
    pub health_conditions: HealthConditions,
}

impl HealthProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bmi_value(&self) -> Option<f64> {
        self.bmi.map(|r| r.value)
    }

    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi.map(|r| r.category)
    }

    /// Whether the food allergen checklist applies
    pub fn has_food_allergy(&self) -> bool {
        self.allergies.contains(FOOD_ALLERGY_CATEGORY)
    }

    /// Food allergens that currently apply (empty when "Food" is unchecked)
    pub fn active_food_allergies(&self) -> impl Iterator<Item = &str> {
        let active = self.has_food_allergy();
        self.food_allergies.iter().filter(move |_| active)
    }

    pub fn has_condition(&self, condition: &str) -> bool {
        self.health_conditions.contains(condition)
    }
}

/// Serialized shape of a profile: `bmi` and `bmiCategory` as two sibling
/// fields, as consumers of the finished profile expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRecord {
    age: u32,
    height: Height,
    weight: Weight,
    target_weight: Weight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bmi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bmi_category: Option<BmiCategory>,
    #[serde(default)]
    allergies: Selection,
    #[serde(default)]
    food_allergies: Selection,
    #[serde(default)]
    health_conditions: HealthConditions,
}

impl From<HealthProfile> for ProfileRecord {
    fn from(profile: HealthProfile) -> Self {
        Self {
            age: profile.age,
            height: profile.height,
            weight: profile.weight,
            target_weight: profile.target_weight,
            bmi: profile.bmi.map(|r| r.value),
            bmi_category: profile.bmi.map(|r| r.category),
            allergies: profile.allergies,
            food_allergies: profile.food_allergies,
            health_conditions: profile.health_conditions,
        }
    }
}

impl TryFrom<ProfileRecord> for HealthProfile {
    type Error = String;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        let measurements = [
            ("height", record.height.value),
            ("weight", record.weight.value),
            ("targetWeight", record.target_weight.value),
        ];
        for (name, value) in measurements {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number, got {}", name, value));
            }
        }

        let bmi = match (record.bmi, record.bmi_category) {
            (Some(value), Some(category)) => {
                if BmiCategory::from_bmi(value) != category {
                    return Err(format!(
                        "bmiCategory {} does not match bmi {}",
                        category.as_str(),
                        value
                    ));
                }
                Some(BmiReading { value, category })
            }
            (None, None) => None,
            _ => return Err("bmi and bmiCategory must be given together".to_string()),
        };

        Ok(Self {
            age: record.age,
            height: record.height,
            weight: record.weight,
            target_weight: record.target_weight,
            bmi,
            allergies: record.allergies,
            food_allergies: record.food_allergies,
            health_conditions: record.health_conditions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{HeightUnit, WeightUnit};

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_default_profile_is_empty() {
        let profile = HealthProfile::new();
        assert_eq!(profile.age, 0);
        assert_eq!(profile.height.unit, HeightUnit::Centimeters);
        assert_eq!(profile.weight.unit, WeightUnit::Kilograms);
        assert_eq!(profile.target_weight.unit, WeightUnit::Kilograms);
        assert!(profile.bmi.is_none());
        assert!(profile.allergies.is_empty());
        assert!(profile.food_allergies.is_empty());
        assert!(profile.health_conditions.is_empty());
    }

    #[test]
    fn test_serialize_bmi_fields_together() {
        let mut profile = HealthProfile::new();
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("bmi").is_none());
        assert!(json.get("bmiCategory").is_none());

        profile.bmi = Some(BmiReading { value: 22.9, category: BmiCategory::Normal });
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["bmi"], 22.9);
        assert_eq!(json["bmiCategory"], "Normal");
        assert_eq!(json["targetWeight"]["unit"], "kg");
    }

    #[test]
    fn test_deserialize_rejects_half_bmi() {
        let json = r#"{
            "age": 30,
            "height": {"value": 175, "unit": "cm"},
            "weight": {"value": 70, "unit": "kg"},
            "targetWeight": {"value": 68, "unit": "kg"},
            "bmi": 22.9
        }"#;
        assert!(serde_json::from_str::<HealthProfile>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_mismatched_category() {
        let json = r#"{
            "age": 30,
            "height": {"value": 175, "unit": "cm"},
            "weight": {"value": 70, "unit": "kg"},
            "targetWeight": {"value": 68, "unit": "kg"},
            "bmi": 15,
            "bmiCategory": "Obese"
        }"#;
        assert!(serde_json::from_str::<HealthProfile>(json).is_err());

        let json = json.replace("\"Obese\"", "\"Underweight\"");
        let profile: HealthProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile.bmi_category(), Some(BmiCategory::Underweight));
    }

    #[test]
    fn test_deserialize_rejects_negative_measurements() {
        let json = r#"{
            "age": 30,
            "height": {"value": 175, "unit": "cm"},
            "weight": {"value": -70, "unit": "kg"},
            "targetWeight": {"value": 68, "unit": "kg"}
        }"#;
        assert!(serde_json::from_str::<HealthProfile>(json).is_err());

        let json = json.replace("-70", "70");
        assert!(serde_json::from_str::<HealthProfile>(&json).is_ok());
    }

    #[test]
    fn test_round_trip_keeps_units_as_entered() {
        let mut profile = HealthProfile::new();
        profile.age = 41;
        profile.height = Height::feet(5.8);
        profile.weight = Weight::pounds(180.0);
        profile.allergies.insert("Food");
        profile.food_allergies.insert("Milk");

        let json = serde_json::to_string(&profile).unwrap();
        let back: HealthProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
        assert_eq!(back.weight.unit, WeightUnit::Pounds);
    }

    #[test]
    fn test_food_allergies_inactive_without_food() {
        let mut profile = HealthProfile::new();
        profile.food_allergies.insert("Peanuts");
        assert_eq!(profile.active_food_allergies().count(), 0);
        // Still stored
        assert_eq!(profile.food_allergies.len(), 1);

        profile.allergies.insert("Food");
        assert_eq!(profile.active_food_allergies().collect::<Vec<_>>(), vec!["Peanuts"]);
    }
}
