//! Wellcheck Tools module
//!
//! MCP tool implementations over a wellness session.

pub mod questionnaire;
pub mod session;
pub mod status;
