//! Alert types

use serde::Serialize;

/// How urgent an alert is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Critical,
    Warning,
    Info,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Critical => "critical",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }
}

/// Button style of an alert action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVariant {
    #[default]
    Default,
    Destructive,
    Outline,
}

/// Recipe collections an alert can point to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeFocus {
    HeartHealthy,
    Diabetic,
    LowSodium,
}

impl RecipeFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeFocus::HeartHealthy => "heart_healthy",
            RecipeFocus::Diabetic => "diabetic",
            RecipeFocus::LowSodium => "low_sodium",
        }
    }
}

/// What invoking an alert action does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum ActionTarget {
    /// Open a web page
    ExternalLink(String),
    /// Dial a number (`tel:` URI)
    Phone(String),
    /// Show recipes of a given kind
    Recipes(RecipeFocus),
    /// Open the profile screen, where the target weight can be edited
    Profile,
}

/// A button offered by an alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertAction {
    pub label: String,
    pub target: ActionTarget,
    pub variant: ActionVariant,
}

impl AlertAction {
    pub fn new(label: impl Into<String>, target: ActionTarget) -> Self {
        Self {
            label: label.into(),
            target,
            variant: ActionVariant::Default,
        }
    }

    pub fn destructive(label: impl Into<String>, target: ActionTarget) -> Self {
        Self {
            variant: ActionVariant::Destructive,
            ..Self::new(label, target)
        }
    }
}

/// A risk notice derived from a health profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    /// Stable id used to remember dismissals
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub actions: Vec<AlertAction>,
    pub dismissible: bool,
}
