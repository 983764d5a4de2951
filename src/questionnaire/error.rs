//! Questionnaire errors

use thiserror::Error;

use super::step::{Field, Step};
use crate::measure::UnitError;

/// Reasons a questionnaire action is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    #[error("Cannot continue from {step}: missing {}", join_fields(.missing))]
    ContinueBlocked { step: Step, missing: Vec<Field> },

    #[error("Back is not available on the first step")]
    BackUnavailable,

    #[error("The questionnaire has already been completed")]
    AlreadyFinished,

    #[error("Field '{field}' cannot be edited on {step}")]
    FieldNotOnStep { field: Field, step: Step },

    #[error("'{value}' is not an option for {field}")]
    UnknownOption { field: Field, value: String },

    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Result type for questionnaire actions
pub type QuestionnaireResult<T> = Result<T, QuestionnaireError>;

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
