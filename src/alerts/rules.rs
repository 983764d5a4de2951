//! Risk alert rules
//!
//! Each rule looks at the finished profile independently. Alerts come out in
//! a fixed order: BMI extremes first, then conditions, then the weight goal.

use tracing::debug;

use super::model::{ActionTarget, Alert, AlertAction, AlertKind, RecipeFocus};
use crate::health::WeightGoal;
use crate::models::HealthProfile;

/// BMI below this is a critical alert
pub const SEVERE_UNDERWEIGHT_BMI: f64 = 16.0;
/// BMI above this is a critical alert
pub const SEVERE_OBESITY_BMI: f64 = 40.0;
/// Goals further than this fraction from current weight get a warning
pub const EXTREME_GOAL_RATIO: f64 = 0.30;

pub const HEART_DISEASE: &str = "Heart Disease";
pub const DIABETES: &str = "Diabetes";
pub const HIGH_BLOOD_PRESSURE: &str = "High Blood Pressure";

/// Conditions that raise an alert of their own
pub const MONITORED_CONDITIONS: [&str; 3] = [HEART_DISEASE, DIABETES, HIGH_BLOOD_PRESSURE];

pub const SEVERE_UNDERWEIGHT_ID: &str = "severe-underweight";
pub const SEVERE_OBESITY_ID: &str = "severe-obesity";
pub const HEART_CONDITION_ID: &str = "heart-condition";
pub const DIABETES_ID: &str = "diabetes-alert";
pub const BLOOD_PRESSURE_ID: &str = "blood-pressure";
pub const EXTREME_WEIGHT_GOAL_ID: &str = "extreme-weight-goal";

/// Every id `evaluate` can produce, in evaluation order
pub const ALERT_IDS: [&str; 6] = [
    SEVERE_UNDERWEIGHT_ID,
    SEVERE_OBESITY_ID,
    HEART_CONDITION_ID,
    DIABETES_ID,
    BLOOD_PRESSURE_ID,
    EXTREME_WEIGHT_GOAL_ID,
];

const FIND_DOCTOR_URL: &str = "https://www.healthgrades.com/find-a-doctor";
const CARDIOLOGY_URL: &str = "https://www.healthgrades.com/cardiology";
const ENDOCRINOLOGY_URL: &str = "https://www.healthgrades.com/endocrinology";
const NUTRITIONIST_URL: &str = "https://www.eatright.org/find-an-expert";
const EMERGENCY_PHONE: &str = "tel:911";

/// Evaluate every rule against a profile
///
/// Pure: the same profile always yields the same alerts. Dismissals are
/// applied by `AlertBoard`, not here.
pub fn evaluate(profile: &HealthProfile) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if let Some(bmi) = profile.bmi_value().filter(|b| *b != 0.0) {
        if bmi < SEVERE_UNDERWEIGHT_BMI {
            alerts.push(severe_underweight(bmi));
        }
        if bmi > SEVERE_OBESITY_BMI {
            alerts.push(severe_obesity(bmi));
        }
    }

    if profile.has_condition(HEART_DISEASE) {
        alerts.push(heart_condition());
    }
    if profile.has_condition(DIABETES) {
        alerts.push(diabetes());
    }
    if profile.has_condition(HIGH_BLOOD_PRESSURE) {
        alerts.push(blood_pressure());
    }

    if let Some(goal) = WeightGoal::from_profile(profile) {
        if goal.relative_change > EXTREME_GOAL_RATIO {
            alerts.push(extreme_weight_goal());
        }
    }

    for alert in &alerts {
        debug!(alert_id = alert.id, kind = alert.kind.as_str(), "Health alert: {}", alert.title);
    }

    alerts
}

fn severe_underweight(bmi: f64) -> Alert {
    Alert {
        id: SEVERE_UNDERWEIGHT_ID,
        kind: AlertKind::Critical,
        title: "Severe Underweight Alert".to_string(),
        message: format!(
            "Your BMI of {} indicates severe underweight. Please consult a healthcare professional immediately.",
            bmi
        ),
        actions: vec![
            AlertAction::destructive("Find Doctor", ActionTarget::ExternalLink(FIND_DOCTOR_URL.to_string())),
            AlertAction::destructive("Emergency", ActionTarget::Phone(EMERGENCY_PHONE.to_string())),
        ],
        dismissible: false,
    }
}

fn severe_obesity(bmi: f64) -> Alert {
    Alert {
        id: SEVERE_OBESITY_ID,
        kind: AlertKind::Critical,
        title: "Severe Obesity Alert".to_string(),
        message: format!(
            "Your BMI of {} indicates severe obesity. Immediate medical consultation is recommended.",
            bmi
        ),
        actions: vec![
            AlertAction::destructive("Find Specialist", ActionTarget::ExternalLink(FIND_DOCTOR_URL.to_string())),
            AlertAction::destructive("Emergency", ActionTarget::Phone(EMERGENCY_PHONE.to_string())),
        ],
        dismissible: false,
    }
}

fn heart_condition() -> Alert {
    Alert {
        id: HEART_CONDITION_ID,
        kind: AlertKind::Warning,
        title: "Heart Health Monitoring".to_string(),
        message: "Due to your heart condition, we recommend regular monitoring and medical follow-ups."
            .to_string(),
        actions: vec![
            AlertAction::new("Find Cardiologist", ActionTarget::ExternalLink(CARDIOLOGY_URL.to_string())),
            AlertAction::new("Heart-Healthy Recipes", ActionTarget::Recipes(RecipeFocus::HeartHealthy)),
        ],
        dismissible: true,
    }
}

fn diabetes() -> Alert {
    Alert {
        id: DIABETES_ID,
        kind: AlertKind::Warning,
        title: "Diabetes Management".to_string(),
        message: "Regular blood sugar monitoring and diabetic-friendly meal planning is crucial for your health."
            .to_string(),
        actions: vec![
            AlertAction::new("Find Endocrinologist", ActionTarget::ExternalLink(ENDOCRINOLOGY_URL.to_string())),
            AlertAction::new("Diabetic Recipes", ActionTarget::Recipes(RecipeFocus::Diabetic)),
        ],
        dismissible: true,
    }
}

fn blood_pressure() -> Alert {
    Alert {
        id: BLOOD_PRESSURE_ID,
        kind: AlertKind::Warning,
        title: "Blood Pressure Monitoring".to_string(),
        message: "Your high blood pressure requires careful monitoring and lifestyle management.".to_string(),
        actions: vec![
            AlertAction::new("Find Doctor", ActionTarget::ExternalLink(FIND_DOCTOR_URL.to_string())),
            AlertAction::new("Low-Sodium Recipes", ActionTarget::Recipes(RecipeFocus::LowSodium)),
        ],
        dismissible: true,
    }
}

fn extreme_weight_goal() -> Alert {
    Alert {
        id: EXTREME_WEIGHT_GOAL_ID,
        kind: AlertKind::Warning,
        title: "Extreme Weight Goal Warning".to_string(),
        message: "Your target weight represents a significant change. Please consult a healthcare professional for a safe plan."
            .to_string(),
        actions: vec![
            AlertAction::new("Find Nutritionist", ActionTarget::ExternalLink(NUTRITIONIST_URL.to_string())),
            AlertAction::new("Adjust Goal", ActionTarget::Profile),
        ],
        dismissible: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::model::ActionVariant;
    use crate::measure::Weight;
    use crate::models::{BmiCategory, BmiReading};

    fn profile_with_bmi(value: f64) -> HealthProfile {
        HealthProfile {
            bmi: Some(BmiReading { value, category: BmiCategory::from_bmi(value) }),
            ..HealthProfile::default()
        }
    }

    fn ids(alerts: &[Alert]) -> Vec<&'static str> {
        alerts.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_severe_underweight_only() {
        let alerts = evaluate(&profile_with_bmi(15.5));
        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.id, "severe-underweight");
        assert_eq!(alert.kind, AlertKind::Critical);
        assert!(!alert.dismissible);
        assert!(alert.message.contains("15.5"));
        assert_eq!(alert.actions.len(), 2);
        assert_eq!(alert.actions[1].target, ActionTarget::Phone("tel:911".to_string()));
        assert!(alert.actions.iter().all(|a| a.variant == ActionVariant::Destructive));
    }

    #[test]
    fn test_severe_obesity_above_forty_only() {
        assert!(evaluate(&profile_with_bmi(40.0)).is_empty());
        let alerts = evaluate(&profile_with_bmi(41.2));
        assert_eq!(ids(&alerts), vec!["severe-obesity"]);
        assert!(!alerts[0].dismissible);
    }

    #[test]
    fn test_bmi_thresholds_are_strict() {
        assert!(evaluate(&profile_with_bmi(16.0)).is_empty());
        assert!(evaluate(&profile_with_bmi(22.0)).is_empty());
    }

    #[test]
    fn test_missing_bmi_never_fires() {
        assert!(evaluate(&HealthProfile::default()).is_empty());
    }

    #[test]
    fn test_diabetes_warning() {
        let mut profile = profile_with_bmi(22.0);
        profile.health_conditions.toggle("Diabetes", true);
        let alerts = evaluate(&profile);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "diabetes-alert");
        assert_eq!(alerts[0].kind, AlertKind::Warning);
        assert!(alerts[0].dismissible);
    }

    #[test]
    fn test_rules_fire_together_in_fixed_order() {
        let mut profile = profile_with_bmi(15.0);
        profile.health_conditions.toggle(HIGH_BLOOD_PRESSURE, true);
        profile.health_conditions.toggle(DIABETES, true);
        profile.health_conditions.toggle(HEART_DISEASE, true);
        profile.weight = Weight::kilograms(40.0);
        profile.target_weight = Weight::kilograms(60.0);

        let alerts = evaluate(&profile);
        assert_eq!(
            ids(&alerts),
            vec![
                "severe-underweight",
                "heart-condition",
                "diabetes-alert",
                "blood-pressure",
                "extreme-weight-goal",
            ]
        );
    }

    #[test]
    fn test_extreme_weight_goal_threshold() {
        let mut profile = HealthProfile::default();
        profile.weight = Weight::kilograms(100.0);
        profile.target_weight = Weight::kilograms(70.0);
        // Exactly 30% is not extreme
        assert!(evaluate(&profile).is_empty());

        profile.target_weight = Weight::kilograms(69.0);
        assert_eq!(ids(&evaluate(&profile)), vec!["extreme-weight-goal"]);

        profile.target_weight = Weight::kilograms(131.0);
        assert_eq!(ids(&evaluate(&profile)), vec!["extreme-weight-goal"]);
    }

    #[test]
    fn test_extreme_goal_needs_both_weights() {
        let mut profile = HealthProfile::default();
        profile.weight = Weight::kilograms(100.0);
        assert!(evaluate(&profile).is_empty());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut profile = profile_with_bmi(45.0);
        profile.health_conditions.toggle(HEART_DISEASE, true);
        assert_eq!(evaluate(&profile), evaluate(&profile));
    }
}
