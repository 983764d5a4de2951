//! Health summary and exported report

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::alerts::Alert;
use crate::health::{bmi_summary_message, daily_calorie_needs, WeightGoal};
use crate::measure::{Height, Weight};
use crate::models::{BmiCategory, HealthProfile};

/// What the dashboard and profile screens show about the user
#[derive(Debug, Clone, Serialize)]
pub struct HealthSummary {
    pub display_name: String,
    pub age: u32,
    pub height: Height,
    pub weight: Weight,
    pub target_weight: Weight,
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub bmi_message: Option<&'static str>,
    pub daily_calories: u32,
    pub weight_goal: Option<WeightGoal>,
    pub allergies: Vec<String>,
    /// Only the allergens that apply while "Food" is checked
    pub food_allergies: Vec<String>,
    /// Reported conditions, without the "None" marker
    pub health_conditions: Vec<String>,
}

impl HealthSummary {
    pub fn from_profile(display_name: String, profile: &HealthProfile) -> Self {
        let bmi_category = profile.bmi_category();
        Self {
            display_name,
            age: profile.age,
            height: profile.height,
            weight: profile.weight,
            target_weight: profile.target_weight,
            bmi: profile.bmi_value(),
            bmi_category,
            bmi_message: bmi_category.map(bmi_summary_message),
            daily_calories: daily_calorie_needs(profile),
            weight_goal: WeightGoal::from_profile(profile),
            allergies: profile.allergies.iter().map(str::to_string).collect(),
            food_allergies: profile.active_food_allergies().map(str::to_string).collect(),
            health_conditions: profile.health_conditions.reported().map(str::to_string).collect(),
        }
    }
}

/// Exportable snapshot of everything the session knows about the user
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub user: String,
    pub display_name: String,
    pub profile: HealthProfile,
    pub summary: HealthSummary,
    pub alerts: Vec<Alert>,
    pub dismissed_alerts: Vec<&'static str>,
    pub generated_at: DateTime<Utc>,
}
