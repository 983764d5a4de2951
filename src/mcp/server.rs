//! Wellcheck MCP Server Implementation
//!
//! Implements the MCP server with all Wellcheck tools. One server process
//! hosts one wellness session.

use std::sync::{Arc, Mutex};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::session::{ProfileEdit, SessionError, WellnessSession};
use crate::tools::questionnaire::{self, BasicInfoInput, FieldValue, TargetWeightInput};
use crate::tools::session;
use crate::tools::status::StatusTracker;

/// Wellcheck MCP Service
#[derive(Clone)]
pub struct WellcheckService {
    status_tracker: Arc<StatusTracker>,
    session: Arc<Mutex<WellnessSession>>,
    tool_router: ToolRouter<WellcheckService>,
}

impl WellcheckService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            session: Arc::new(Mutex::new(WellnessSession::new(config))),
            tool_router: Self::tool_router(),
        }
    }

    /// Run a tool against the session and serialize its response
    fn with_session<T, F>(&self, f: F) -> Result<CallToolResult, McpError>
    where
        T: Serialize,
        F: FnOnce(&mut WellnessSession) -> Result<T, SessionError>,
    {
        let mut session = self
            .session
            .lock()
            .map_err(|_| McpError::internal_error("Session lock poisoned", None))?;
        let result = f(&mut *session).map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        to_result(&result)
    }
}

fn to_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

/// A number, or text read the way a form input would read it
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl From<NumberOrText> for FieldValue {
    fn from(value: NumberOrText) -> Self {
        match value {
            NumberOrText::Number(n) => FieldValue::Number(n),
            NumberOrText::Text(text) => FieldValue::Text(text),
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SignInParams {
    pub email: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetBasicInfoParams {
    /// Age in whole years
    pub age: Option<NumberOrText>,
    pub height: Option<NumberOrText>,
    /// "cm" or "ft"
    pub height_unit: Option<String>,
    pub weight: Option<NumberOrText>,
    /// "kg" or "lbs"
    pub weight_unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetTargetWeightParams {
    pub target_weight: Option<NumberOrText>,
    /// "kg" or "lbs"
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToggleOptionParams {
    /// Option name, matched case-insensitively
    pub option: String,
    #[serde(default = "default_checked")]
    pub checked: bool,
}

fn default_checked() -> bool { true }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateProfileParams {
    pub age: Option<u32>,
    /// New target weight, in the unit already chosen
    pub target_weight: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DismissAlertParams {
    pub alert_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NavigateParams {
    /// dashboard, recipes, coach, food-recognition, recipe-builder, community or profile
    pub screen: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl WellcheckService {
    // --- Status ---

    #[tool(description = "Get the current status of the Wellcheck service including build info, session state, and process information")]
    fn wellcheck_status(&self) -> Result<CallToolResult, McpError> {
        let session = self
            .session
            .lock()
            .map_err(|_| McpError::internal_error("Session lock poisoned", None))?;
        let status = self.status_tracker.get_status(&session);
        to_result(&status)
    }

    #[tool(description = "Get step-by-step instructions for running the health check. Call this before starting or when unsure how to use the Wellcheck tools.")]
    fn health_check_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::HEALTH_CHECK_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(HEALTH_CHECK_INSTRUCTIONS)]))
    }

    // --- Onboarding ---

    #[tool(description = "Sign in with an email address. Moves from the login screen to the welcome screen.")]
    fn sign_in(&self, Parameters(p): Parameters<SignInParams>) -> Result<CallToolResult, McpError> {
        self.with_session(|s| session::sign_in(s, &p.email))
    }

    #[tool(description = "Start the five-step health check from the welcome screen")]
    fn start_health_check(&self) -> Result<CallToolResult, McpError> {
        self.with_session(questionnaire::start_health_check)
    }

    // --- Questionnaire ---

    #[tool(description = "Get the current health check step, progress, missing fields and entered values")]
    fn get_questionnaire(&self) -> Result<CallToolResult, McpError> {
        self.with_session(|s| questionnaire::get_questionnaire(s))
    }

    #[tool(description = "Set age, height and weight on step 1. Values may be numbers or text; unreadable or negative values become 0.")]
    fn set_basic_info(&self, Parameters(p): Parameters<SetBasicInfoParams>) -> Result<CallToolResult, McpError> {
        let input = BasicInfoInput {
            age: p.age.map(Into::into),
            height: p.height.map(Into::into),
            height_unit: p.height_unit,
            weight: p.weight.map(Into::into),
            weight_unit: p.weight_unit,
        };
        self.with_session(|s| questionnaire::set_basic_info(s, input))
    }

    #[tool(description = "Set the target weight on step 3")]
    fn set_target_weight(&self, Parameters(p): Parameters<SetTargetWeightParams>) -> Result<CallToolResult, McpError> {
        let input = TargetWeightInput {
            value: p.target_weight.map(Into::into),
            unit: p.unit,
        };
        self.with_session(|s| questionnaire::set_target_weight(s, input))
    }

    #[tool(description = "Check or uncheck an allergy category on step 4 (Food, Dust, Pollen, Medicine, Other)")]
    fn toggle_allergy(&self, Parameters(p): Parameters<ToggleOptionParams>) -> Result<CallToolResult, McpError> {
        self.with_session(|s| questionnaire::toggle_allergy(s, &p.option, p.checked))
    }

    #[tool(description = "Check or uncheck a specific food allergen on step 4. Only available while the Food category is checked.")]
    fn toggle_food_allergy(&self, Parameters(p): Parameters<ToggleOptionParams>) -> Result<CallToolResult, McpError> {
        self.with_session(|s| questionnaire::toggle_food_allergy(s, &p.option, p.checked))
    }

    #[tool(description = "Check or uncheck a health condition on step 5. 'None' is exclusive with every other condition.")]
    fn toggle_health_condition(&self, Parameters(p): Parameters<ToggleOptionParams>) -> Result<CallToolResult, McpError> {
        self.with_session(|s| questionnaire::toggle_health_condition(s, &p.option, p.checked))
    }

    #[tool(description = "Continue to the next step, or complete the health check on step 5. Refused while required fields are missing.")]
    fn continue_step(&self) -> Result<CallToolResult, McpError> {
        self.with_session(questionnaire::continue_step)
    }

    #[tool(description = "Go back one step without validating")]
    fn back_step(&self) -> Result<CallToolResult, McpError> {
        self.with_session(questionnaire::back_step)
    }

    #[tool(description = "Skip to step 5 without validating. On step 5 this completes the health check.")]
    fn skip_step(&self) -> Result<CallToolResult, McpError> {
        self.with_session(questionnaire::skip_step)
    }

    // --- Profile ---

    #[tool(description = "Get the signed-in user and the completed health profile")]
    fn get_profile(&self) -> Result<CallToolResult, McpError> {
        self.with_session(|s| Ok(session::get_profile(s)))
    }

    #[tool(description = "Edit age or target weight after the health check. BMI is not recalculated.")]
    fn update_profile(&self, Parameters(p): Parameters<UpdateProfileParams>) -> Result<CallToolResult, McpError> {
        let edit = ProfileEdit {
            age: p.age,
            target_weight: p.target_weight,
        };
        self.with_session(|s| session::update_profile(s, edit))
    }

    #[tool(description = "Get BMI with advice, estimated daily calories and weight goal for the completed profile")]
    fn get_health_summary(&self) -> Result<CallToolResult, McpError> {
        self.with_session(|s| session::get_health_summary(s))
    }

    #[tool(description = "Export a full health report with profile, summary, alerts and a generation timestamp")]
    fn export_health_report(&self) -> Result<CallToolResult, McpError> {
        self.with_session(|s| session::export_health_report(s))
    }

    // --- Alerts ---

    #[tool(description = "Get health risk alerts for the completed profile. Critical alerts must be shown to the user.")]
    fn get_alerts(&self) -> Result<CallToolResult, McpError> {
        self.with_session(|s| Ok(session::get_alerts(s)))
    }

    #[tool(description = "Dismiss a warning alert for the rest of the session. Critical alerts cannot be dismissed.")]
    fn dismiss_alert(&self, Parameters(p): Parameters<DismissAlertParams>) -> Result<CallToolResult, McpError> {
        self.with_session(|s| session::dismiss_alert(s, &p.alert_id))
    }

    // --- Navigation ---

    #[tool(description = "Switch to another screen of the bottom navigation. Available once the health check is complete.")]
    fn navigate(&self, Parameters(p): Parameters<NavigateParams>) -> Result<CallToolResult, McpError> {
        self.with_session(|s| session::navigate(s, &p.screen))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for WellcheckService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "wellcheck".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Wellcheck Health Check".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Wellcheck - guided health check with BMI, calorie needs and risk alerts. \
                 IMPORTANT: Call health_check_instructions first. \
                 Onboarding: sign_in, start_health_check. \
                 Questionnaire: get_questionnaire, set_basic_info, set_target_weight, \
                 toggle_allergy, toggle_food_allergy, toggle_health_condition, \
                 continue_step, back_step, skip_step. \
                 After completion: get_profile, update_profile, get_health_summary, \
                 get_alerts, dismiss_alert, navigate, export_health_report. \
                 Status: wellcheck_status."
                    .into(),
            ),
        }
    }
}
