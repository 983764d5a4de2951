//! Wellness session
//!
//! One signed-in user moving from login through the health check to the
//! tabbed screens. The session owns the finished health profile; everything
//! else reads it through `profile()`.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::error::{SessionError, SessionResult};
use super::screen::Screen;
use super::summary::{HealthReport, HealthSummary};
use crate::alerts::{is_known_alert, Alert, AlertBoard, DismissOutcome};
use crate::config::Config;
use crate::models::HealthProfile;
use crate::questionnaire::{QuestionnaireController, Step, Transition};

/// Where a questionnaire action left the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "step", rename_all = "snake_case")]
pub enum Progress {
    /// Still in the questionnaire, now on this step
    Step(Step),
    /// Profile stored, dashboard showing
    Completed,
}

/// Fields the profile screen lets the user change after the health check
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfileEdit {
    pub age: Option<u32>,
    /// New target weight value, kept in the current target unit
    pub target_weight: Option<f64>,
}

/// Alert surface state
#[derive(Debug, Clone, Serialize)]
pub struct AlertsView {
    /// Whether the host shows the alert surface at all
    pub visible: bool,
    /// Active alerts; empty while the surface is hidden
    pub alerts: Vec<Alert>,
    pub dismissed: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct WellnessSession {
    config: Config,
    screen: Screen,
    email: Option<String>,
    questionnaire: Option<QuestionnaireController>,
    profile: Option<HealthProfile>,
    alert_board: AlertBoard,
}

impl Default for WellnessSession {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl WellnessSession {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            screen: Screen::Login,
            email: None,
            questionnaire: None,
            profile: None,
            alert_board: AlertBoard::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// The finished health profile, once the health check is complete
    pub fn profile(&self) -> Option<&HealthProfile> {
        self.profile.as_ref()
    }

    /// The questionnaire while it is running
    pub fn questionnaire(&self) -> Option<&QuestionnaireController> {
        self.questionnaire.as_ref()
    }

    pub fn questionnaire_mut(&mut self) -> SessionResult<&mut QuestionnaireController> {
        self.questionnaire
            .as_mut()
            .ok_or(SessionError::QuestionnaireNotActive)
    }

    pub fn bottom_navigation_visible(&self) -> bool {
        self.screen.shows_bottom_navigation()
    }

    /// First part of the email, capitalised
    pub fn display_name(&self) -> Option<String> {
        self.email.as_deref().map(display_name_from_email)
    }

    // ------------------------------------------------------------------
    // Onboarding
    // ------------------------------------------------------------------

    pub fn sign_in(&mut self, email: &str) -> SessionResult<()> {
        if self.screen != Screen::Login {
            return Err(SessionError::AlreadySignedIn);
        }
        let email = email.trim();
        if email.is_empty() {
            return Err(SessionError::EmptyEmail);
        }

        self.email = Some(email.to_string());
        info!(user = %display_name_from_email(email), "Signed in");
        self.set_screen(Screen::Welcome);
        Ok(())
    }

    pub fn start_health_check(&mut self) -> SessionResult<&QuestionnaireController> {
        match self.screen {
            Screen::Login => return Err(SessionError::NotSignedIn),
            Screen::Welcome => {}
            _ => return Err(SessionError::QuestionnaireAlreadyStarted),
        }

        self.set_screen(Screen::Questionnaire);
        let controller = self
            .questionnaire
            .insert(QuestionnaireController::with_bmi_mode(self.config.bmi_mode));
        Ok(&*controller)
    }

    /// Continue, or Complete on the last step
    pub fn advance(&mut self) -> SessionResult<Progress> {
        let transition = self.questionnaire_mut()?.advance()?;
        Ok(self.apply(transition))
    }

    pub fn back(&mut self) -> SessionResult<Step> {
        Ok(self.questionnaire_mut()?.back()?)
    }

    pub fn skip(&mut self) -> SessionResult<Progress> {
        let transition = self.questionnaire_mut()?.skip()?;
        Ok(self.apply(transition))
    }

    fn apply(&mut self, transition: Transition) -> Progress {
        match transition {
            Transition::Moved(step) => Progress::Step(step),
            Transition::Completed(profile) => {
                self.alert_board.announce(&profile);
                self.profile = Some(profile);
                self.questionnaire = None;
                self.set_screen(Screen::Dashboard);
                Progress::Completed
            }
        }
    }

    // ------------------------------------------------------------------
    // Tabs
    // ------------------------------------------------------------------

    /// Switch between the bottom navigation screens
    pub fn navigate(&mut self, target: Screen) -> SessionResult<Screen> {
        if !self.bottom_navigation_visible() || !target.is_tab() {
            warn!(from = %self.screen, to = %target, "Navigation refused");
            return Err(SessionError::NavigationLocked(target));
        }
        if target.requires_profile() && self.profile.is_none() {
            return Err(SessionError::ProfileRequired(target));
        }

        self.set_screen(target);
        Ok(target)
    }

    /// Apply the profile screen's edits. BMI is left as calculated.
    pub fn update_profile(&mut self, edit: ProfileEdit) -> SessionResult<&HealthProfile> {
        let profile = self
            .profile
            .as_mut()
            .ok_or(SessionError::HealthCheckIncomplete)?;

        if let Some(age) = edit.age {
            debug!(age, "Profile age updated");
            profile.age = age;
        }
        if let Some(value) = edit.target_weight {
            let value = if value.is_finite() && value >= 0.0 {
                value
            } else {
                warn!(value, "Target weight coerced to 0");
                0.0
            };
            debug!(value, "Profile target weight updated");
            profile.target_weight.value = value;
        }

        Ok(&*profile)
    }

    // ------------------------------------------------------------------
    // Alerts
    // ------------------------------------------------------------------

    pub fn alerts(&self) -> AlertsView {
        let dismissed = self.alert_board.dismissed().collect();
        let Some(profile) = &self.profile else {
            return AlertsView {
                visible: false,
                alerts: Vec::new(),
                dismissed,
            };
        };

        let visible = self.config.alert_gate.is_open(profile);
        AlertsView {
            visible,
            alerts: if visible {
                self.alert_board.active(profile)
            } else {
                Vec::new()
            },
            dismissed,
        }
    }

    pub fn dismiss_alert(&mut self, id: &str) -> SessionResult<DismissOutcome> {
        if !is_known_alert(id) {
            return Err(SessionError::UnknownAlert(id.to_string()));
        }
        let profile = self
            .profile
            .as_ref()
            .ok_or(SessionError::HealthCheckIncomplete)?;
        Ok(self.alert_board.dismiss(profile, id))
    }

    // ------------------------------------------------------------------
    // Reporting
    // ------------------------------------------------------------------

    pub fn summary(&self) -> SessionResult<HealthSummary> {
        let (email, profile) = self.signed_in_profile()?;
        Ok(HealthSummary::from_profile(
            display_name_from_email(email),
            profile,
        ))
    }

    pub fn export_report(&self) -> SessionResult<HealthReport> {
        let (email, profile) = self.signed_in_profile()?;
        let display_name = display_name_from_email(email);
        let report = HealthReport {
            user: email.to_string(),
            display_name: display_name.clone(),
            profile: profile.clone(),
            summary: HealthSummary::from_profile(display_name, profile),
            alerts: self.alert_board.active(profile),
            dismissed_alerts: self.alert_board.dismissed().collect(),
            generated_at: Utc::now(),
        };
        info!(alerts = report.alerts.len(), "Health report exported");
        Ok(report)
    }

    fn signed_in_profile(&self) -> SessionResult<(&str, &HealthProfile)> {
        let email = self.email.as_deref().ok_or(SessionError::NotSignedIn)?;
        let profile = self
            .profile
            .as_ref()
            .ok_or(SessionError::HealthCheckIncomplete)?;
        Ok((email, profile))
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            info!(from = %self.screen, to = %screen, "Screen changed");
            self.screen = screen;
        }
    }
}

fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
