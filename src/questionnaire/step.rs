//! Questionnaire steps and the fields they own

use serde::Serialize;

/// Number of steps in the questionnaire
pub const TOTAL_STEPS: u8 = 5;

/// One page of the questionnaire, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    BasicInfo,
    BmiResult,
    TargetWeight,
    Allergies,
    HealthConditions,
}

impl Step {
    pub const ALL: [Step; TOTAL_STEPS as usize] = [
        Step::BasicInfo,
        Step::BmiResult,
        Step::TargetWeight,
        Step::Allergies,
        Step::HealthConditions,
    ];

    pub const FIRST: Step = Step::BasicInfo;
    pub const LAST: Step = Step::HealthConditions;

    /// 1-based position
    pub fn number(&self) -> u8 {
        match self {
            Step::BasicInfo => 1,
            Step::BmiResult => 2,
            Step::TargetWeight => 3,
            Step::Allergies => 4,
            Step::HealthConditions => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Step::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn next(&self) -> Option<Self> {
        Step::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        Step::from_number(self.number() - 1)
    }

    pub fn is_last(&self) -> bool {
        *self == Step::LAST
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::BasicInfo => "Basic Information",
            Step::BmiResult => "Your BMI Result",
            Step::TargetWeight => "Target Weight",
            Step::Allergies => "Allergies",
            Step::HealthConditions => "Health Conditions",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Step::BasicInfo => "Tell us about yourself",
            Step::BmiResult => "Let's analyze your health status",
            Step::TargetWeight => "Set your wellness goals",
            Step::Allergies => "Help us keep you safe",
            Step::HealthConditions => "Understand your health needs",
        }
    }

    /// Label of the forward button
    pub fn action_label(&self) -> &'static str {
        if self.is_last() {
            "Complete"
        } else {
            "Continue"
        }
    }

    /// Progress shown while on this step, as a percentage
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.number()) * 100.0 / f64::from(TOTAL_STEPS)
    }

    /// Fields that must be non-zero before Continue is allowed
    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            Step::BasicInfo => &[Field::Age, Field::Height, Field::Weight],
            Step::TargetWeight => &[Field::TargetWeight],
            Step::BmiResult | Step::Allergies | Step::HealthConditions => &[],
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

/// An editable profile field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Age,
    Height,
    Weight,
    TargetWeight,
    Allergies,
    FoodAllergies,
    HealthConditions,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Height => "height",
            Field::Weight => "weight",
            Field::TargetWeight => "target_weight",
            Field::Allergies => "allergies",
            Field::FoodAllergies => "food_allergies",
            Field::HealthConditions => "health_conditions",
        }
    }

    /// The step whose form edits this field
    pub fn step(&self) -> Step {
        match self {
            Field::Age | Field::Height | Field::Weight => Step::BasicInfo,
            Field::TargetWeight => Step::TargetWeight,
            Field::Allergies | Field::FoodAllergies => Step::Allergies,
            Field::HealthConditions => Step::HealthConditions,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
