//! Health questionnaire
//!
//! A linear five-step wizard over a single health profile.

mod controller;
mod error;
mod step;

pub use controller::{FlowState, QuestionnaireController, QuestionnaireView, Transition};
pub use error::{QuestionnaireError, QuestionnaireResult};
pub use step::{Field, Step, TOTAL_STEPS};
