//! Alert surface gate
//!
//! The host decides whether to show the alert surface at all with a coarser
//! check than the rules themselves. Its default upper BMI threshold (35) is
//! lower than the severe obesity rule (40), so a BMI between the two opens
//! the surface without producing a BMI alert.

use serde::Serialize;

use super::rules::{MONITORED_CONDITIONS, SEVERE_UNDERWEIGHT_BMI};
use crate::models::HealthProfile;

/// Default upper BMI threshold of the gate
pub const DEFAULT_GATE_HIGH_BMI: f64 = 35.0;

/// Thresholds for showing the alert surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlertGate {
    pub low_bmi: f64,
    pub high_bmi: f64,
}

impl Default for AlertGate {
    fn default() -> Self {
        Self {
            low_bmi: SEVERE_UNDERWEIGHT_BMI,
            high_bmi: DEFAULT_GATE_HIGH_BMI,
        }
    }
}

impl AlertGate {
    pub fn new(low_bmi: f64, high_bmi: f64) -> Self {
        Self { low_bmi, high_bmi }
    }

    /// Whether the alert surface should render for this profile
    pub fn is_open(&self, profile: &HealthProfile) -> bool {
        let bmi_flagged = profile
            .bmi_value()
            .filter(|b| *b != 0.0)
            .is_some_and(|bmi| bmi < self.low_bmi || bmi > self.high_bmi);

        bmi_flagged
            || MONITORED_CONDITIONS
                .iter()
                .any(|condition| profile.has_condition(condition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::rules::evaluate;
    use crate::models::{BmiCategory, BmiReading};

    fn profile_with_bmi(value: f64) -> HealthProfile {
        HealthProfile {
            bmi: Some(BmiReading { value, category: BmiCategory::from_bmi(value) }),
            ..HealthProfile::default()
        }
    }

    #[test]
    fn test_gate_bmi_thresholds() {
        let gate = AlertGate::default();
        assert!(gate.is_open(&profile_with_bmi(15.9)));
        assert!(!gate.is_open(&profile_with_bmi(16.0)));
        assert!(!gate.is_open(&profile_with_bmi(35.0)));
        assert!(gate.is_open(&profile_with_bmi(35.1)));
    }

    #[test]
    fn test_gate_opens_for_monitored_conditions() {
        let gate = AlertGate::default();
        let mut profile = profile_with_bmi(22.0);
        profile.health_conditions.toggle("Asthma", true);
        assert!(!gate.is_open(&profile));
        profile.health_conditions.toggle("Heart Disease", true);
        assert!(gate.is_open(&profile));
    }

    #[test]
    fn test_gate_closed_without_bmi() {
        assert!(!AlertGate::default().is_open(&HealthProfile::default()));
    }

    #[test]
    fn test_gate_and_rules_disagree_between_35_and_40() {
        let profile = profile_with_bmi(37.0);
        assert!(AlertGate::default().is_open(&profile));
        assert!(evaluate(&profile).is_empty());
    }

    #[test]
    fn test_gate_can_be_aligned_with_rules() {
        let gate = AlertGate::new(16.0, 40.0);
        assert!(!gate.is_open(&profile_with_bmi(37.0)));
        assert!(gate.is_open(&profile_with_bmi(40.5)));
    }
}
