//! MCP server module
//!
//! Exposes a wellness session over the Model Context Protocol.

mod server;

pub use server::WellcheckService;
