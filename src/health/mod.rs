//! Health calculations
//!
//! BMI, energy needs, weight goals and the guidance text that goes with them.

pub mod bmi;
pub mod energy;
pub mod guidance;

pub use bmi::{calculate_bmi, round_to_tenth, BmiMode};
pub use energy::{
    daily_calorie_needs, GoalDirection, WeightGoal, DEFAULT_DAILY_CALORIES,
    MODERATE_ACTIVITY_FACTOR,
};
pub use guidance::{bmi_result_message, bmi_summary_message, TARGET_WEIGHT_TIP};
