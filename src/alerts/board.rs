//! Dismissal tracking
//!
//! Dismissed ids are remembered for the whole session and filtered out of
//! every later evaluation. There is no expiry. The board also remembers which
//! critical alerts have been logged so each is reported once.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{info, warn};

use super::model::{Alert, AlertKind};
use super::rules::{evaluate, ALERT_IDS};
use crate::models::HealthProfile;

/// Outcome of a dismissal request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissOutcome {
    Dismissed,
    AlreadyDismissed,
    /// Critical alerts cannot be dismissed
    NotDismissible,
    /// The id is not currently raised for this profile
    NotActive,
}

/// Session-scoped alert state
#[derive(Debug, Clone, Default)]
pub struct AlertBoard {
    dismissed: BTreeSet<&'static str>,
    announced: BTreeSet<&'static str>,
}

impl AlertBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts for the profile, minus dismissed ones
    pub fn active(&self, profile: &HealthProfile) -> Vec<Alert> {
        evaluate(profile)
            .into_iter()
            .filter(|alert| !self.dismissed.contains(alert.id))
            .collect()
    }

    /// Dismiss an alert currently raised for the profile
    pub fn dismiss(&mut self, profile: &HealthProfile, id: &str) -> DismissOutcome {
        if self.dismissed.contains(id) {
            return DismissOutcome::AlreadyDismissed;
        }

        let Some(alert) = evaluate(profile).into_iter().find(|a| a.id == id) else {
            return DismissOutcome::NotActive;
        };

        if !alert.dismissible {
            warn!(alert_id = alert.id, "Attempt to dismiss a non-dismissible alert");
            return DismissOutcome::NotDismissible;
        }

        self.dismissed.insert(alert.id);
        info!(alert_id = alert.id, "Alert dismissed");
        DismissOutcome::Dismissed
    }

    /// Log critical alerts not reported before. Returns the newly reported ids.
    pub fn announce(&mut self, profile: &HealthProfile) -> Vec<&'static str> {
        let mut fresh = Vec::new();
        for alert in evaluate(profile) {
            if alert.kind == AlertKind::Critical && self.announced.insert(alert.id) {
                warn!(alert_id = alert.id, "Critical health alert: {}", alert.title);
                fresh.push(alert.id);
            }
        }
        fresh
    }

    pub fn is_dismissed(&self, id: &str) -> bool {
        self.dismissed.contains(id)
    }

    pub fn dismissed(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dismissed.iter().copied()
    }

    /// Forget all dismissals
    pub fn reset(&mut self) {
        self.dismissed.clear();
    }
}

/// Whether an id is one the rules can produce
pub fn is_known_alert(id: &str) -> bool {
    ALERT_IDS.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BmiCategory, BmiReading};

    fn profile(bmi: f64, conditions: &[&str]) -> HealthProfile {
        let mut profile = HealthProfile {
            bmi: Some(BmiReading { value: bmi, category: BmiCategory::from_bmi(bmi) }),
            ..HealthProfile::default()
        };
        for condition in conditions {
            profile.health_conditions.toggle(condition, true);
        }
        profile
    }

    #[test]
    fn test_dismissed_alert_is_filtered_next_time() {
        let p = profile(22.0, &["Diabetes"]);
        let mut board = AlertBoard::new();

        let alerts = board.active(&p);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "diabetes-alert");
        assert!(alerts[0].dismissible);

        assert_eq!(board.dismiss(&p, "diabetes-alert"), DismissOutcome::Dismissed);
        assert!(board.active(&p).is_empty());
        assert_eq!(board.dismiss(&p, "diabetes-alert"), DismissOutcome::AlreadyDismissed);
    }

    #[test]
    fn test_critical_alert_cannot_be_dismissed() {
        let p = profile(15.5, &[]);
        let mut board = AlertBoard::new();
        assert_eq!(board.dismiss(&p, "severe-underweight"), DismissOutcome::NotDismissible);
        assert_eq!(board.active(&p).len(), 1);
    }

    #[test]
    fn test_dismissing_inactive_alert() {
        let p = profile(22.0, &[]);
        let mut board = AlertBoard::new();
        assert_eq!(board.dismiss(&p, "heart-condition"), DismissOutcome::NotActive);
        assert_eq!(board.dismiss(&p, "no-such-alert"), DismissOutcome::NotActive);
        assert_eq!(board.dismissed().count(), 0);
    }

    #[test]
    fn test_dismissal_outlives_profile_changes() {
        let mut board = AlertBoard::new();
        let first = profile(22.0, &["Heart Disease"]);
        board.dismiss(&first, "heart-condition");

        let edited = profile(23.0, &["Heart Disease", "Diabetes"]);
        let ids: Vec<_> = board.active(&edited).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["diabetes-alert"]);
    }

    #[test]
    fn test_reset_restores_alerts() {
        let p = profile(22.0, &["Diabetes"]);
        let mut board = AlertBoard::new();
        board.dismiss(&p, "diabetes-alert");
        board.reset();
        assert_eq!(board.active(&p).len(), 1);
    }

    #[test]
    fn test_critical_alerts_announced_once() {
        let p = profile(15.0, &["Heart Disease", "Diabetes"]);
        let mut board = AlertBoard::new();

        assert_eq!(board.announce(&p), vec!["severe-underweight"]);
        assert!(board.announce(&p).is_empty());

        let worse = profile(42.0, &["Heart Disease"]);
        assert_eq!(board.announce(&worse), vec!["severe-obesity"]);
    }

    #[test]
    fn test_known_alert_ids() {
        assert!(is_known_alert("blood-pressure"));
        assert!(!is_known_alert("blood_pressure"));
    }
}
