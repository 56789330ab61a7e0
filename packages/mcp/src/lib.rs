//! # Situ MCP
//!
//! Blocking client for the local MCP edits endpoint. The payload entries
//! are passed through as raw JSON for display; only the element filter
//! inspects them, and it is a pure function usable without any network.

mod client;
mod errors;

pub use client::{filter_edits, McpClient, McpEnvelope, DEFAULT_MCP_ENDPOINT};
pub use errors::{McpError, McpResult};
