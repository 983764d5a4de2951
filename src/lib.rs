//! Wellcheck Library
//!
//! Guided health check: a five-step questionnaire producing a health profile,
//! BMI and energy estimates, risk alerts, and the session that hosts them.

pub mod alerts;
pub mod build_info;
pub mod config;
pub mod health;
pub mod mcp;
pub mod measure;
pub mod models;
pub mod questionnaire;
pub mod session;
pub mod tools;
