//! Data models
//!
//! The health profile and the checklists it is built from.

mod options;
mod profile;
mod selection;

pub use options::{
    Checklist, ALLERGY_CATEGORIES, FOOD_ALLERGENS, FOOD_ALLERGY_CATEGORY, HEALTH_CONDITIONS,
};
pub use profile::{BmiCategory, BmiReading, HealthProfile};
pub use selection::{HealthConditions, Selection, NONE_CONDITION};
