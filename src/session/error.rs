//! Session errors

use thiserror::Error;

use super::screen::Screen;
use crate::questionnaire::QuestionnaireError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Sign in first")]
    NotSignedIn,

    #[error("Already signed in")]
    AlreadySignedIn,

    #[error("Email must not be empty")]
    EmptyEmail,

    #[error("The health check is not in progress")]
    QuestionnaireNotActive,

    #[error("The health check has already been started")]
    QuestionnaireAlreadyStarted,

    #[error("Complete the health check first")]
    HealthCheckIncomplete,

    #[error("Screen '{0}' needs a completed health profile")]
    ProfileRequired(Screen),

    #[error("Cannot navigate to '{0}' from here")]
    NavigationLocked(Screen),

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error("Unknown alert: {0}")]
    UnknownAlert(String),

    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),
}

pub type SessionResult<T> = Result<T, SessionError>;
