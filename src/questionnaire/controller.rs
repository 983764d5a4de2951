//! Questionnaire flow controller
//!
//! Owns the health profile while it is being filled in. The profile leaves the
//! controller exactly once, inside `Transition::Completed`, when the last step
//! is confirmed or skipped.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::error::{QuestionnaireError, QuestionnaireResult};
use super::step::{Field, Step, TOTAL_STEPS};
use crate::health::{calculate_bmi, BmiMode};
use crate::measure::{parse_decimal, parse_whole_number, HeightUnit, WeightUnit};
use crate::models::{Checklist, HealthProfile};

/// Where the questionnaire currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "step", rename_all = "snake_case")]
pub enum FlowState {
    InProgress(Step),
    Finished,
}

/// Result of a navigation action
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Now showing this step
    Moved(Step),
    /// The questionnaire is done; the caller now owns the profile
    Completed(HealthProfile),
}

impl Transition {
    pub fn step(&self) -> Option<Step> {
        match self {
            Transition::Moved(step) => Some(*step),
            Transition::Completed(_) => None,
        }
    }
}

/// Snapshot of the questionnaire for display
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireView {
    pub step: u8,
    pub total_steps: u8,
    pub step_id: Step,
    pub title: &'static str,
    pub description: &'static str,
    pub action_label: &'static str,
    pub progress_percent: f64,
    pub can_go_back: bool,
    pub can_continue: bool,
    pub missing_fields: Vec<Field>,
    pub food_allergies_visible: bool,
    pub profile: HealthProfile,
}

/// Five-step health questionnaire
#[derive(Debug, Clone)]
pub struct QuestionnaireController {
    state: FlowState,
    profile: HealthProfile,
    bmi_mode: BmiMode,
}

impl Default for QuestionnaireController {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionnaireController {
    /// Start on the first step with an empty profile
    pub fn new() -> Self {
        Self::with_bmi_mode(BmiMode::default())
    }

    pub fn with_bmi_mode(bmi_mode: BmiMode) -> Self {
        Self {
            state: FlowState::InProgress(Step::FIRST),
            profile: HealthProfile::default(),
            bmi_mode,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Current step, or None once finished
    pub fn current_step(&self) -> Option<Step> {
        match self.state {
            FlowState::InProgress(step) => Some(step),
            FlowState::Finished => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state == FlowState::Finished
    }

    pub fn bmi_mode(&self) -> BmiMode {
        self.bmi_mode
    }

    /// The profile as entered so far. Empty after completion.
    pub fn profile(&self) -> &HealthProfile {
        &self.profile
    }

    pub fn progress_percent(&self) -> f64 {
        match self.state {
            FlowState::InProgress(step) => step.progress_percent(),
            FlowState::Finished => 100.0,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.current_step().and_then(|s| s.previous()).is_some()
    }

    pub fn can_continue(&self) -> bool {
        self.current_step().is_some() && self.missing_fields().is_empty()
    }

    /// Required fields of the current step that are still zero
    pub fn missing_fields(&self) -> Vec<Field> {
        let Some(step) = self.current_step() else {
            return Vec::new();
        };

        step.required_fields()
            .iter()
            .copied()
            .filter(|field| !self.is_filled(*field))
            .collect()
    }

    /// The food allergen checklist is shown on the allergy step while "Food"
    /// is checked
    pub fn food_allergies_visible(&self) -> bool {
        self.current_step() == Some(Step::Allergies) && self.profile.has_food_allergy()
    }

    pub fn view(&self) -> QuestionnaireView {
        let step = self.current_step().unwrap_or(Step::LAST);
        QuestionnaireView {
            step: step.number(),
            total_steps: TOTAL_STEPS,
            step_id: step,
            title: step.title(),
            description: step.description(),
            action_label: step.action_label(),
            progress_percent: self.progress_percent(),
            can_go_back: self.can_go_back(),
            can_continue: self.can_continue(),
            missing_fields: self.missing_fields(),
            food_allergies_visible: self.food_allergies_visible(),
            profile: self.profile.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Step 1: basic information
    // ------------------------------------------------------------------

    pub fn set_age(&mut self, age: u32) -> QuestionnaireResult<()> {
        self.require_step(Field::Age)?;
        self.profile.age = age;
        debug!(age, "Age updated");
        Ok(())
    }

    /// Age from form text; unreadable text clears it
    pub fn enter_age(&mut self, text: &str) -> QuestionnaireResult<()> {
        self.set_age(parse_whole_number(text))
    }

    pub fn set_height_value(&mut self, value: f64) -> QuestionnaireResult<()> {
        self.require_step(Field::Height)?;
        self.profile.height.value = non_negative(value);
        debug!(height = self.profile.height.value, "Height updated");
        Ok(())
    }

    pub fn enter_height_value(&mut self, text: &str) -> QuestionnaireResult<()> {
        self.set_height_value(parse_decimal(text))
    }

    pub fn set_height_unit(&mut self, unit: HeightUnit) -> QuestionnaireResult<()> {
        self.require_step(Field::Height)?;
        self.profile.height.unit = unit;
        debug!(unit = unit.as_str(), "Height unit updated");
        Ok(())
    }

    pub fn set_weight_value(&mut self, value: f64) -> QuestionnaireResult<()> {
        self.require_step(Field::Weight)?;
        self.profile.weight.value = non_negative(value);
        debug!(weight = self.profile.weight.value, "Weight updated");
        Ok(())
    }

    pub fn enter_weight_value(&mut self, text: &str) -> QuestionnaireResult<()> {
        self.set_weight_value(parse_decimal(text))
    }

    pub fn set_weight_unit(&mut self, unit: WeightUnit) -> QuestionnaireResult<()> {
        self.require_step(Field::Weight)?;
        self.profile.weight.unit = unit;
        debug!(unit = unit.as_str(), "Weight unit updated");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Step 3: target weight
    // ------------------------------------------------------------------

    pub fn set_target_weight_value(&mut self, value: f64) -> QuestionnaireResult<()> {
        self.require_step(Field::TargetWeight)?;
        self.profile.target_weight.value = non_negative(value);
        debug!(target = self.profile.target_weight.value, "Target weight updated");
        Ok(())
    }

    pub fn enter_target_weight_value(&mut self, text: &str) -> QuestionnaireResult<()> {
        self.set_target_weight_value(parse_decimal(text))
    }

    pub fn set_target_weight_unit(&mut self, unit: WeightUnit) -> QuestionnaireResult<()> {
        self.require_step(Field::TargetWeight)?;
        self.profile.target_weight.unit = unit;
        debug!(unit = unit.as_str(), "Target weight unit updated");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Steps 4 and 5: checklists
    // ------------------------------------------------------------------

    /// Check or uncheck a general allergy category. Unchecking "Food" keeps
    /// the food allergens already chosen.
    pub fn toggle_allergy(&mut self, value: &str, checked: bool) -> QuestionnaireResult<()> {
        self.require_step(Field::Allergies)?;
        let option = resolve(Checklist::Allergies, Field::Allergies, value)?;
        self.profile.allergies.toggle(option, checked);
        debug!(allergy = option, checked, "Allergy toggled");
        Ok(())
    }

    /// Check or uncheck a food allergen. Only possible while "Food" is
    /// checked.
    pub fn toggle_food_allergy(&mut self, value: &str, checked: bool) -> QuestionnaireResult<()> {
        self.require_step(Field::FoodAllergies)?;
        if !self.profile.has_food_allergy() {
            return Err(QuestionnaireError::FieldNotOnStep {
                field: Field::FoodAllergies,
                step: Step::Allergies,
            });
        }
        let option = resolve(Checklist::FoodAllergies, Field::FoodAllergies, value)?;
        self.profile.food_allergies.toggle(option, checked);
        debug!(allergen = option, checked, "Food allergy toggled");
        Ok(())
    }

    /// Check or uncheck a health condition; "None" stays exclusive
    pub fn toggle_health_condition(&mut self, value: &str, checked: bool) -> QuestionnaireResult<()> {
        self.require_step(Field::HealthConditions)?;
        let option = resolve(Checklist::HealthConditions, Field::HealthConditions, value)?;
        self.profile.health_conditions.toggle(option, checked);
        debug!(condition = option, checked, "Health condition toggled");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Continue (or Complete on the last step)
    ///
    /// Refused while required fields of the current step are zero. Leaving
    /// basic information computes the BMI.
    pub fn advance(&mut self) -> QuestionnaireResult<Transition> {
        let step = self.active_step()?;

        let missing = self.missing_fields();
        if !missing.is_empty() {
            warn!(%step, ?missing, "Continue refused, required fields missing");
            return Err(QuestionnaireError::ContinueBlocked { step, missing });
        }

        if step == Step::BasicInfo {
            let reading = calculate_bmi(&self.profile.weight, &self.profile.height, self.bmi_mode);
            info!(
                bmi = reading.value,
                category = reading.category.as_str(),
                mode = self.bmi_mode.as_str(),
                "BMI calculated"
            );
            self.profile.bmi = Some(reading);
        }

        match step.next() {
            Some(next) => Ok(self.move_to(next)),
            None => Ok(self.finish()),
        }
    }

    /// Go back one step. Never validated.
    pub fn back(&mut self) -> QuestionnaireResult<Step> {
        let step = self.active_step()?;
        let previous = step.previous().ok_or(QuestionnaireError::BackUnavailable)?;
        self.move_to(previous);
        Ok(previous)
    }

    /// Skip to the last step without validating or computing anything.
    /// On the last step this completes the questionnaire.
    pub fn skip(&mut self) -> QuestionnaireResult<Transition> {
        let step = self.active_step()?;
        if step.is_last() {
            return Ok(self.finish());
        }
        info!(from = %step, "Skipping to the last step");
        Ok(self.move_to(Step::LAST))
    }

    fn active_step(&self) -> QuestionnaireResult<Step> {
        self.current_step().ok_or(QuestionnaireError::AlreadyFinished)
    }

    fn move_to(&mut self, step: Step) -> Transition {
        info!(%step, "Questionnaire step changed");
        self.state = FlowState::InProgress(step);
        Transition::Moved(step)
    }

    fn finish(&mut self) -> Transition {
        self.state = FlowState::Finished;
        let profile = std::mem::take(&mut self.profile);
        info!(
            bmi = ?profile.bmi_value(),
            conditions = profile.health_conditions.len(),
            "Questionnaire completed"
        );
        Transition::Completed(profile)
    }

    fn require_step(&self, field: Field) -> QuestionnaireResult<()> {
        let step = self.active_step()?;
        if field.step() != step {
            return Err(QuestionnaireError::FieldNotOnStep { field, step });
        }
        Ok(())
    }

    fn is_filled(&self, field: Field) -> bool {
        match field {
            Field::Age => self.profile.age > 0,
            Field::Height => self.profile.height.is_set(),
            Field::Weight => self.profile.weight.is_set(),
            Field::TargetWeight => self.profile.target_weight.is_set(),
            Field::Allergies | Field::FoodAllergies | Field::HealthConditions => true,
        }
    }
}

fn resolve(checklist: Checklist, field: Field, value: &str) -> QuestionnaireResult<&'static str> {
    checklist
        .resolve(value)
        .ok_or_else(|| QuestionnaireError::UnknownOption {
            field,
            value: value.to_string(),
        })
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
