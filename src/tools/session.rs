//! Session tools
//!
//! Sign in, navigation, the finished profile, alerts and reports.

use serde::Serialize;

use crate::alerts::{AlertKind, DismissOutcome};
use crate::models::HealthProfile;
use crate::session::{
    AlertsView, HealthReport, HealthSummary, ProfileEdit, Screen, SessionError, SessionResult,
    WellnessSession,
};

#[derive(Debug, Clone, Serialize)]
pub struct SignInResponse {
    pub success: bool,
    pub message: String,
    pub display_name: Option<String>,
    pub screen: Screen,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigateResponse {
    pub success: bool,
    pub screen: Screen,
    pub title: &'static str,
    pub bottom_navigation_visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub screen: Screen,
    /// Absent until the health check is complete
    pub profile: Option<HealthProfile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DismissAlertResponse {
    pub alert_id: String,
    pub outcome: DismissOutcome,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertsResponse {
    #[serde(flatten)]
    pub view: AlertsView,
    pub critical_count: usize,
}

pub fn sign_in(session: &mut WellnessSession, email: &str) -> SessionResult<SignInResponse> {
    session.sign_in(email)?;
    let display_name = session.display_name();
    Ok(SignInResponse {
        success: true,
        message: format!(
            "Welcome, {}! Start the health check when ready.",
            display_name.as_deref().unwrap_or_default()
        ),
        display_name,
        screen: session.screen(),
    })
}

/// Switch tabs. The screen name is matched loosely.
pub fn navigate(session: &mut WellnessSession, screen: &str) -> SessionResult<NavigateResponse> {
    let target = Screen::from_str(screen).ok_or_else(|| SessionError::UnknownScreen(screen.to_string()))?;
    let screen = session.navigate(target)?;
    Ok(NavigateResponse {
        success: true,
        screen,
        title: screen.display_name(),
        bottom_navigation_visible: session.bottom_navigation_visible(),
    })
}

pub fn get_profile(session: &WellnessSession) -> ProfileResponse {
    ProfileResponse {
        email: session.email().map(str::to_string),
        display_name: session.display_name(),
        screen: session.screen(),
        profile: session.profile().cloned(),
    }
}

pub fn update_profile(session: &mut WellnessSession, edit: ProfileEdit) -> SessionResult<ProfileResponse> {
    session.update_profile(edit)?;
    Ok(get_profile(session))
}

pub fn get_alerts(session: &WellnessSession) -> AlertsResponse {
    let view = session.alerts();
    let critical_count = view
        .alerts
        .iter()
        .filter(|alert| alert.kind == AlertKind::Critical)
        .count();
    AlertsResponse { view, critical_count }
}

pub fn dismiss_alert(session: &mut WellnessSession, alert_id: &str) -> SessionResult<DismissAlertResponse> {
    let outcome = session.dismiss_alert(alert_id)?;
    let message = match outcome {
        DismissOutcome::Dismissed => "Alert dismissed for this session",
        DismissOutcome::AlreadyDismissed => "Alert was already dismissed",
        DismissOutcome::NotDismissible => "Critical alerts cannot be dismissed",
        DismissOutcome::NotActive => "Alert is not currently raised",
    };
    Ok(DismissAlertResponse {
        alert_id: alert_id.to_string(),
        outcome,
        message: message.to_string(),
    })
}

pub fn get_health_summary(session: &WellnessSession) -> SessionResult<HealthSummary> {
    session.summary()
}

pub fn export_health_report(session: &WellnessSession) -> SessionResult<HealthReport> {
    session.export_report()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::questionnaire::{skip_step, start_health_check};

    fn signed_in() -> WellnessSession {
        let mut session = WellnessSession::default();
        sign_in(&mut session, "robin@example.com").unwrap();
        session
    }

    #[test]
    fn test_sign_in_response() {
        let mut session = WellnessSession::default();
        let response = sign_in(&mut session, "robin@example.com").unwrap();
        assert_eq!(response.display_name.as_deref(), Some("Robin"));
        assert_eq!(response.screen, Screen::Welcome);
        assert!(response.message.contains("Robin"));
    }

    #[test]
    fn test_navigate_unknown_screen() {
        let mut session = signed_in();
        assert_eq!(
            navigate(&mut session, "settings").unwrap_err(),
            SessionError::UnknownScreen("settings".to_string())
        );
    }

    #[test]
    fn test_navigate_after_health_check() {
        let mut session = signed_in();
        start_health_check(&mut session).unwrap();
        skip_step(&mut session).unwrap();
        skip_step(&mut session).unwrap();

        let response = navigate(&mut session, "food_recognition").unwrap();
        assert_eq!(response.screen, Screen::FoodRecognition);
        assert!(response.bottom_navigation_visible);
    }

    #[test]
    fn test_profile_absent_before_health_check() {
        let session = signed_in();
        let response = get_profile(&session);
        assert_eq!(response.email.as_deref(), Some("robin@example.com"));
        assert!(response.profile.is_none());
        assert!(get_health_summary(&session).is_err());
    }

    #[test]
    fn test_alerts_empty_without_profile() {
        let session = signed_in();
        let response = get_alerts(&session);
        assert!(!response.view.visible);
        assert_eq!(response.critical_count, 0);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["visible"], false);
    }
}
