//! Guidance text shown alongside a BMI result

use crate::models::BmiCategory;

/// Encouragement shown on the BMI result step
pub fn bmi_result_message(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Normal => {
            "Excellent! You're in the healthy weight range. Let's maintain this with nutritious recipes!"
        }
        BmiCategory::Underweight => {
            "Let's focus on healthy weight gain with nutrient-rich, calorie-dense meals."
        }
        BmiCategory::Overweight => {
            "Great start! We'll create delicious, balanced recipes to support your wellness journey."
        }
        BmiCategory::Obese => {
            "You're taking an important step! Together we'll build healthy habits with tasty, nourishing meals."
        }
    }
}

/// Short advice used by the health summary
pub fn bmi_summary_message(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Normal => "You're in the healthy weight range! Keep up the good work.",
        BmiCategory::Underweight => "Consider gaining some healthy weight with nutritious meals.",
        BmiCategory::Overweight => "A balanced diet can help you reach your ideal weight.",
        BmiCategory::Obese => "Let's create a healthy meal plan to support your wellness journey.",
    }
}

/// Advice attached to the target weight step
pub const TARGET_WEIGHT_TIP: &str = "Aim for gradual, sustainable changes. A healthy weight loss is typically 0.5-1 kg (1-2 lbs) per week.";
