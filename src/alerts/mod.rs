//! Risk alerts
//!
//! Rules that turn a finished health profile into emergency and warning
//! notices, the session's dismissal memory, and the host's coarse gate.

mod board;
mod gate;
mod model;
mod rules;

pub use board::{is_known_alert, AlertBoard, DismissOutcome};
pub use gate::{AlertGate, DEFAULT_GATE_HIGH_BMI};
pub use model::{ActionTarget, ActionVariant, Alert, AlertAction, AlertKind, RecipeFocus};
pub use rules::{
    evaluate, ALERT_IDS, BLOOD_PRESSURE_ID, DIABETES, DIABETES_ID, EXTREME_GOAL_RATIO,
    EXTREME_WEIGHT_GOAL_ID, HEART_CONDITION_ID, HEART_DISEASE, HIGH_BLOOD_PRESSURE,
    MONITORED_CONDITIONS, SEVERE_OBESITY_BMI, SEVERE_OBESITY_ID, SEVERE_UNDERWEIGHT_BMI,
    SEVERE_UNDERWEIGHT_ID,
};
