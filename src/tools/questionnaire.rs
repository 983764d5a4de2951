//! Health check tools
//!
//! Drive the five-step questionnaire of a session.

use serde::Serialize;

use crate::health::{bmi_result_message, TARGET_WEIGHT_TIP};
use crate::measure::{HeightUnit, WeightUnit};
use crate::questionnaire::{QuestionnaireController, QuestionnaireError, QuestionnaireView, Step};
use crate::session::{Progress, Screen, SessionError, SessionResult, WellnessSession};

/// A form value as sent by the client
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    /// Read leniently, like a text input
    Text(String),
}

/// Values for step 1. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct BasicInfoInput {
    pub age: Option<FieldValue>,
    pub height: Option<FieldValue>,
    pub height_unit: Option<String>,
    pub weight: Option<FieldValue>,
    pub weight_unit: Option<String>,
}

/// Values for step 3
#[derive(Debug, Clone, Default)]
pub struct TargetWeightInput {
    pub value: Option<FieldValue>,
    pub unit: Option<String>,
}

/// State of the health check after an action
#[derive(Debug, Clone, Serialize)]
pub struct FlowResponse {
    pub success: bool,
    pub message: String,
    pub screen: Screen,
    /// Absent once the health check is complete
    pub questionnaire: Option<QuestionnaireView>,
    /// Advice for the step now showing
    pub guidance: Option<&'static str>,
}

fn flow_response(session: &WellnessSession, success: bool, message: impl Into<String>) -> FlowResponse {
    let questionnaire = session.questionnaire().map(QuestionnaireController::view);
    let guidance = questionnaire.as_ref().and_then(|view| match view.step_id {
        Step::BmiResult => view.profile.bmi_category().map(bmi_result_message),
        Step::TargetWeight => Some(TARGET_WEIGHT_TIP),
        _ => None,
    });

    FlowResponse {
        success,
        message: message.into(),
        screen: session.screen(),
        questionnaire,
        guidance,
    }
}

fn progress_message(progress: Progress) -> String {
    match progress {
        Progress::Step(step) => format!("Now on {}", step),
        Progress::Completed => "Health check complete. Showing the dashboard.".to_string(),
    }
}

/// Begin the health check from the welcome screen
pub fn start_health_check(session: &mut WellnessSession) -> SessionResult<FlowResponse> {
    session.start_health_check()?;
    Ok(flow_response(session, true, "Health check started"))
}

/// Current questionnaire state
pub fn get_questionnaire(session: &WellnessSession) -> SessionResult<FlowResponse> {
    if session.questionnaire().is_none() {
        return Err(SessionError::QuestionnaireNotActive);
    }
    Ok(flow_response(session, true, "Health check in progress"))
}

/// Fill in age, height and weight on step 1
///
/// Units are parsed before anything is written, so a rejected call leaves
/// the profile unchanged.
pub fn set_basic_info(session: &mut WellnessSession, input: BasicInfoInput) -> SessionResult<FlowResponse> {
    let height_unit = input
        .height_unit
        .as_deref()
        .map(HeightUnit::from_str)
        .transpose()
        .map_err(QuestionnaireError::from)?;
    let weight_unit = input
        .weight_unit
        .as_deref()
        .map(WeightUnit::from_str)
        .transpose()
        .map_err(QuestionnaireError::from)?;

    let q = session.questionnaire_mut()?;
    if let Some(unit) = height_unit {
        q.set_height_unit(unit)?;
    }
    if let Some(unit) = weight_unit {
        q.set_weight_unit(unit)?;
    }
    if let Some(age) = input.age {
        match age {
            FieldValue::Number(n) => q.enter_age(&n.to_string())?,
            FieldValue::Text(text) => q.enter_age(&text)?,
        }
    }
    if let Some(height) = input.height {
        match height {
            FieldValue::Number(n) => q.set_height_value(n)?,
            FieldValue::Text(text) => q.enter_height_value(&text)?,
        }
    }
    if let Some(weight) = input.weight {
        match weight {
            FieldValue::Number(n) => q.set_weight_value(n)?,
            FieldValue::Text(text) => q.enter_weight_value(&text)?,
        }
    }

    Ok(flow_response(session, true, "Basic information updated"))
}

/// Fill in the target weight on step 3
pub fn set_target_weight(session: &mut WellnessSession, input: TargetWeightInput) -> SessionResult<FlowResponse> {
    let unit = input
        .unit
        .as_deref()
        .map(WeightUnit::from_str)
        .transpose()
        .map_err(QuestionnaireError::from)?;

    let q = session.questionnaire_mut()?;
    if let Some(unit) = unit {
        q.set_target_weight_unit(unit)?;
    }
    if let Some(value) = input.value {
        match value {
            FieldValue::Number(n) => q.set_target_weight_value(n)?,
            FieldValue::Text(text) => q.enter_target_weight_value(&text)?,
        }
    }

    Ok(flow_response(session, true, "Target weight updated"))
}

pub fn toggle_allergy(session: &mut WellnessSession, allergy: &str, checked: bool) -> SessionResult<FlowResponse> {
    session.questionnaire_mut()?.toggle_allergy(allergy, checked)?;
    Ok(flow_response(session, true, toggle_message(allergy, checked)))
}

pub fn toggle_food_allergy(session: &mut WellnessSession, allergen: &str, checked: bool) -> SessionResult<FlowResponse> {
    session.questionnaire_mut()?.toggle_food_allergy(allergen, checked)?;
    Ok(flow_response(session, true, toggle_message(allergen, checked)))
}

pub fn toggle_health_condition(
    session: &mut WellnessSession,
    condition: &str,
    checked: bool,
) -> SessionResult<FlowResponse> {
    session.questionnaire_mut()?.toggle_health_condition(condition, checked)?;
    Ok(flow_response(session, true, toggle_message(condition, checked)))
}

fn toggle_message(option: &str, checked: bool) -> String {
    if checked {
        format!("Checked {}", option)
    } else {
        format!("Unchecked {}", option)
    }
}

/// Continue, or Complete on the last step
///
/// A refused Continue is reported in the response rather than as an error so
/// the caller sees which fields are missing.
pub fn continue_step(session: &mut WellnessSession) -> SessionResult<FlowResponse> {
    match session.advance() {
        Ok(progress) => Ok(flow_response(session, true, progress_message(progress))),
        Err(SessionError::Questionnaire(err @ QuestionnaireError::ContinueBlocked { .. })) => {
            Ok(flow_response(session, false, err.to_string()))
        }
        Err(err) => Err(err),
    }
}

pub fn back_step(session: &mut WellnessSession) -> SessionResult<FlowResponse> {
    let step = session.back()?;
    Ok(flow_response(session, true, format!("Back to {}", step)))
}

pub fn skip_step(session: &mut WellnessSession) -> SessionResult<FlowResponse> {
    let progress = session.skip()?;
    Ok(flow_response(session, true, progress_message(progress)))
}
