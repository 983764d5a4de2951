//! Energy needs and weight goals

use serde::Serialize;

use crate::models::HealthProfile;

/// Daily calories reported when the profile lacks age, weight or height
pub const DEFAULT_DAILY_CALORIES: u32 = 2000;

/// Activity multiplier for a moderately active day
pub const MODERATE_ACTIVITY_FACTOR: f64 = 1.55;

/// Estimated daily calorie needs
///
/// Harris-Benedict basal rate with the male constants, scaled by moderate
/// activity. Measurements are converted to metric first.
pub fn daily_calorie_needs(profile: &HealthProfile) -> u32 {
    if profile.age == 0 || !profile.weight.is_set() || !profile.height.is_set() {
        return DEFAULT_DAILY_CALORIES;
    }

    let weight_kg = profile.weight.to_kilograms();
    let height_cm = profile.height.to_centimeters();
    let bmr = 88.362 + (13.397 * weight_kg) + (4.799 * height_cm) - (5.677 * profile.age as f64);

    (bmr * MODERATE_ACTIVITY_FACTOR).round().max(0.0) as u32
}

/// Direction of a weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalDirection {
    Lose,
    Gain,
    Maintain,
}

impl GoalDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalDirection::Lose => "lose",
            GoalDirection::Gain => "gain",
            GoalDirection::Maintain => "maintain",
        }
    }
}

/// Distance between current and target weight
///
/// Values are compared as entered; a target in a different unit than the
/// current weight is not converted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightGoal {
    /// Absolute difference, in the current weight's unit
    pub difference: f64,
    pub direction: GoalDirection,
    /// Difference relative to current weight (0.25 = 25%)
    pub relative_change: f64,
}

impl WeightGoal {
    /// None unless both current and target weight are set
    pub fn from_profile(profile: &HealthProfile) -> Option<Self> {
        let current = profile.weight.value;
        let target = profile.target_weight.value;
        if current <= 0.0 || target <= 0.0 {
            return None;
        }

        let delta = current - target;
        let direction = if delta > 0.0 {
            GoalDirection::Lose
        } else if delta < 0.0 {
            GoalDirection::Gain
        } else {
            GoalDirection::Maintain
        };

        Some(Self {
            difference: delta.abs(),
            direction,
            relative_change: delta.abs() / current,
        })
    }

    pub fn percent_change(&self) -> f64 {
        self.relative_change * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{Height, Weight};

    fn profile(age: u32, weight: Weight, height: Height) -> HealthProfile {
        HealthProfile {
            age,
            weight,
            height,
            ..HealthProfile::default()
        }
    }

    #[test]
    fn test_calorie_needs_metric() {
        // BMR = 88.362 + 937.79 + 839.825 - 170.31 = 1695.667; x1.55 = 2628.28
        let p = profile(30, Weight::kilograms(70.0), Height::centimeters(175.0));
        assert_eq!(daily_calorie_needs(&p), 2628);
    }

    #[test]
    fn test_calorie_needs_converts_imperial() {
        let metric = profile(30, Weight::kilograms(70.0), Height::centimeters(175.0));
        let imperial = profile(30, Weight::pounds(154.324), Height::feet(5.74147));
        let diff = daily_calorie_needs(&metric) as i64 - daily_calorie_needs(&imperial) as i64;
        assert!(diff.abs() <= 1);
    }

    #[test]
    fn test_calorie_needs_default_when_incomplete() {
        let p = profile(0, Weight::kilograms(70.0), Height::centimeters(175.0));
        assert_eq!(daily_calorie_needs(&p), DEFAULT_DAILY_CALORIES);

        let p = profile(30, Weight::kilograms(0.0), Height::centimeters(175.0));
        assert_eq!(daily_calorie_needs(&p), DEFAULT_DAILY_CALORIES);
    }

    #[test]
    fn test_weight_goal_lose() {
        let mut p = HealthProfile::default();
        p.weight = Weight::kilograms(100.0);
        p.target_weight = Weight::kilograms(80.0);
        let goal = WeightGoal::from_profile(&p).unwrap();
        assert_eq!(goal.direction, GoalDirection::Lose);
        assert!((goal.difference - 20.0).abs() < 0.001);
        assert!((goal.percent_change() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_weight_goal_gain_and_maintain() {
        let mut p = HealthProfile::default();
        p.weight = Weight::kilograms(50.0);
        p.target_weight = Weight::kilograms(55.0);
        assert_eq!(WeightGoal::from_profile(&p).unwrap().direction, GoalDirection::Gain);

        p.target_weight = Weight::kilograms(50.0);
        let goal = WeightGoal::from_profile(&p).unwrap();
        assert_eq!(goal.direction, GoalDirection::Maintain);
        assert_eq!(goal.relative_change, 0.0);
    }

    #[test]
    fn test_weight_goal_requires_both_values() {
        let mut p = HealthProfile::default();
        p.weight = Weight::kilograms(70.0);
        assert!(WeightGoal::from_profile(&p).is_none());
    }
}
