//! HTTP client for the MCP edits API.

use crate::errors::{McpError, McpResult};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Default endpoint used when no `--endpoint` flag or config entry is
/// supplied.
pub const DEFAULT_MCP_ENDPOINT: &str = "http://127.0.0.1:7124";

/// Response returned by GET `/edits`.
#[derive(Debug, Default, Deserialize)]
pub struct McpEnvelope {
    #[serde(default)]
    pub edits: Vec<Value>,
}

pub struct McpClient {
    agent: ureq::Agent,
    base_url: String,
}

impl McpClient {
    pub fn new(endpoint: Option<&str>) -> Self {
        let base_url = endpoint
            .unwrap_or(DEFAULT_MCP_ENDPOINT)
            .trim_end_matches('/')
            .to_string();

        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url,
        }
    }

    /// Fetches every edit the endpoint knows about, untouched.
    ///
    /// GET `/edits`
    pub fn fetch_edits(&self) -> McpResult<Vec<Value>> {
        let url = format!("{}/edits", self.base_url);
        let response = self.agent.get(&url).call()?;
        let envelope: McpEnvelope = response
            .into_body()
            .read_json()
            .map_err(McpError::Decode)?;

        debug!(count = envelope.edits.len(), %url, "fetched MCP edits");
        Ok(envelope.edits)
    }

    /// Fetches and keeps only the edits targeting one element.
    pub fn edits_for(&self, element_id: &str) -> McpResult<Vec<Value>> {
        Ok(filter_edits(self.fetch_edits()?, element_id))
    }
}

/// Keeps entries whose `locator.elementId` or top-level `elementId` equals
/// the requested id, preserving order and content.
pub fn filter_edits(edits: Vec<Value>, element_id: &str) -> Vec<Value> {
    edits
        .into_iter()
        .filter(|edit| edit_targets(edit, element_id))
        .collect()
}

fn edit_targets(edit: &Value, element_id: &str) -> bool {
    let nested = edit
        .get("locator")
        .and_then(|locator| locator.get("elementId"))
        .and_then(Value::as_str);
    let flat = edit.get("elementId").and_then(Value::as_str);

    nested == Some(element_id) || flat == Some(element_id)
}
