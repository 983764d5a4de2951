//! Checklist option catalogs
//!
//! The fixed choices offered by the allergy and health condition steps.

use serde::Serialize;

use super::selection::NONE_CONDITION;

/// General allergy categories (step 4)
pub const ALLERGY_CATEGORIES: [&str; 5] = ["Food", "Dust", "Pollen", "Medicine", "Other"];

/// Category that reveals the food allergen checklist
pub const FOOD_ALLERGY_CATEGORY: &str = "Food";

/// Specific food allergens (step 4, shown when "Food" is checked)
pub const FOOD_ALLERGENS: [&str; 10] = [
    "Peanuts",
    "Tree Nuts",
    "Milk",
    "Eggs",
    "Fish",
    "Shellfish",
    "Soy",
    "Wheat",
    "Sesame",
    "Other",
];

/// Health conditions (step 5)
pub const HEALTH_CONDITIONS: [&str; 8] = [
    "Diabetes",
    "Hypertension",
    "Heart Disease",
    "Asthma",
    "High Cholesterol",
    "Arthritis",
    NONE_CONDITION,
    "Other",
];

/// Which checklist an option belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Checklist {
    Allergies,
    FoodAllergies,
    HealthConditions,
}

impl Checklist {
    pub fn as_str(&self) -> &'static str {
        match self {
            Checklist::Allergies => "allergies",
            Checklist::FoodAllergies => "food_allergies",
            Checklist::HealthConditions => "health_conditions",
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Checklist::Allergies => &ALLERGY_CATEGORIES,
            Checklist::FoodAllergies => &FOOD_ALLERGENS,
            Checklist::HealthConditions => &HEALTH_CONDITIONS,
        }
    }

    /// Match free text against the catalog, ignoring case and surrounding
    /// whitespace. Returns the catalog spelling.
    pub fn resolve(&self, value: &str) -> Option<&'static str> {
        let wanted = value.trim();
        self.options()
            .iter()
            .copied()
            .find(|option| option.eq_ignore_ascii_case(wanted))
    }
}
