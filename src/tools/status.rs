//! Wellcheck Status Tool
//!
//! Runtime status of the service and the usage guide for assistants.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::questionnaire::Step;
use crate::session::{Screen, WellnessSession};

/// Health check instructions for AI assistants
pub const HEALTH_CHECK_INSTRUCTIONS: &str = r#"
# Wellcheck Health Check Instructions

This guide explains how to walk a user through the Wellcheck health check.

## Overview

A session moves through these screens:
1. **Login** - `sign_in(email)`
2. **Welcome** - `start_health_check()`
3. **Questionnaire** - five steps, see below
4. **Dashboard** and the other tabs - `navigate(screen)`

---

## The Five Steps

| Step | Title | Required |
|------|-------|----------|
| 1 | Basic Information | age, height, weight (all non-zero) |
| 2 | Your BMI Result | nothing |
| 3 | Target Weight | target weight (non-zero) |
| 4 | Allergies | nothing |
| 5 | Health Conditions | nothing |

- Fields can only be edited while their step is showing.
- `continue_step` is refused while a required field is still zero. The
  response lists the missing fields.
- BMI is calculated when leaving step 1 and shown on step 2.
- `back_step` never validates. There is no back on step 1.
- `skip_step` jumps straight to step 5 without calculating anything.
  Skipping on step 5 completes the health check.

### Entering Values

`set_basic_info` and `set_target_weight` accept numbers or text. Text is read
leniently: `"30"` and `"30 years"` are both 30, and anything unreadable or
negative becomes 0.

Units:
- Height: `cm` (default) or `ft`
- Weight: `kg` (default) or `lbs`

### Checklists

- `toggle_allergy`: Food, Dust, Pollen, Medicine, Other
- `toggle_food_allergy`: only while "Food" is checked. Peanuts, Tree Nuts,
  Milk, Eggs, Fish, Shellfish, Soy, Wheat, Sesame, Other
- `toggle_health_condition`: Diabetes, Hypertension, Heart Disease, Asthma,
  High Cholesterol, Arthritis, None, Other

Option names are matched case-insensitively.

Checking "None" clears every other condition. Checking any other condition
clears "None".

---

## After Completion

- `get_health_summary` - BMI with advice, estimated daily calories, weight goal
- `get_alerts` - risk alerts. Critical alerts cannot be dismissed.
- `dismiss_alert(id)` - hides a warning for the rest of the session
- `update_profile` - change age or target weight value
- `export_health_report` - full JSON report with a timestamp

## Notes

- Wellcheck gives general guidance only. Always pass critical alerts on to
  the user together with their actions (find a doctor, emergency number).
- Nothing is persisted. A restart begins a new session at Login.
"#;

/// Runtime status of the Wellcheck service
#[derive(Debug, Clone, Serialize)]
pub struct WellcheckStatus {
    /// Build and active configuration
    #[serde(flatten)]
    pub build: BuildInfo,

    /// Session information
    pub screen: Screen,
    pub questionnaire_step: Option<Step>,
    pub signed_in: bool,
    pub profile_complete: bool,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, session: &WellnessSession) -> WellcheckStatus {
        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        WellcheckStatus {
            build: BuildInfo::for_config(session.config()),
            screen: session.screen(),
            questionnaire_step: session.questionnaire().and_then(|q| q.current_step()),
            signed_in: session.email().is_some(),
            profile_complete: session.profile().is_some(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertGate;
    use crate::config::Config;
    use crate::health::BmiMode;

    #[test]
    fn test_status_reflects_session() {
        let tracker = StatusTracker::new();
        let mut session = WellnessSession::default();

        let status = tracker.get_status(&session);
        assert_eq!(status.screen, Screen::Login);
        assert!(!status.signed_in);
        assert_eq!(status.process_id, std::process::id());

        session.sign_in("kim@example.com").unwrap();
        session.start_health_check().unwrap();
        let status = tracker.get_status(&session);
        assert_eq!(status.screen, Screen::Questionnaire);
        assert_eq!(status.questionnaire_step, Some(Step::BasicInfo));
        assert!(!status.profile_complete);
    }

    #[test]
    fn test_status_carries_session_configuration() {
        let config = Config {
            bmi_mode: BmiMode::Metric,
            alert_gate: AlertGate::new(16.0, 40.0),
        };
        let session = WellnessSession::new(config);
        let status = StatusTracker::new().get_status(&session);
        assert_eq!(status.build.bmi_mode, BmiMode::Metric);
        assert_eq!(status.build.alert_gate.high_bmi, 40.0);

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["bmi_mode"], "metric");
        assert_eq!(json["alert_gate"]["high_bmi"], 40.0);
        assert!(json["version"].is_string());
    }
}
