//! # Edit Records
//!
//! One `EditRecord` per logged design-edit event. The record `type` selects
//! the payload schema:
//!
//! - `element`: unified format, `original`/`updated` are `{states: {...}}`
//!   state maps covering every category
//! - `fill` / `fills`: legacy flat fill-layer arrays
//! - `border`: legacy flat border object
//! - `inputs`: typed-input snapshot, echoed without filtering
//!
//! Records are created by the external editor UI and appended to the log;
//! this subsystem only ever reads them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Schema selector for an edit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    Element,
    Fill,
    Fills,
    Border,
    Inputs,
    /// Any unrecognized type string. Never matches a category predicate.
    #[serde(other)]
    Unknown,
}

impl Default for EditKind {
    fn default() -> Self {
        EditKind::Unknown
    }
}

/// Nested element reference used by the MCP envelope format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    #[serde(rename = "elementId")]
    pub element_id: String,
}

/// Sparse per-state recorded deltas, used only as a fallback source for
/// non-default states.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeSet {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub states: BTreeMap<String, StateChange>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<Value>,
}

/// One logged change event for one element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRecord {
    #[serde(rename = "type", default)]
    pub kind: EditKind,

    /// Stable identifier matching a DOM `data-id`.
    #[serde(rename = "elementId", default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,

    /// MCP envelope form carries the id nested instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locator: Option<Locator>,

    /// Origin descriptor (file:line:col or UI action). Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Epoch milliseconds. Used only for display formatting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Pre-edit snapshot. Shape depends on `kind`.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub original: Value,

    /// Post-edit snapshot, same shape as `original`.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub updated: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<ChangeSet>,
}

impl EditRecord {
    /// The element this record targets, from either id form.
    pub fn element(&self) -> Option<&str> {
        self.element_id
            .as_deref()
            .or_else(|| self.locator.as_ref().map(|l| l.element_id.as_str()))
    }

    pub fn matches(&self, element_id: &str) -> bool {
        self.element() == Some(element_id)
    }

    /// Recorded delta for one state, when the editor persisted one.
    pub fn state_change(&self, state: &str) -> Option<&StateChange> {
        self.changes.as_ref()?.states.get(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_unified_record() {
        let raw = json!({
            "elementId": "demo-color-block-primary",
            "type": "element",
            "source": "App.jsx:120:4",
            "timestamp": 1700000000000_i64,
            "original": {"states": {"default": {"fill": [{"mode": "solid", "color": "#EF9108"}]}}},
            "updated": {"states": {"default": {"fill": [{"mode": "solid", "color": "#FF0000"}]}}}
        });

        let record: EditRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.kind, EditKind::Element);
        assert_eq!(record.element(), Some("demo-color-block-primary"));
        assert_eq!(record.timestamp, Some(1700000000000));
        assert!(record.original.get("states").is_some());
    }

    #[test]
    fn test_locator_form_resolves_element() {
        let raw = json!({
            "type": "fill",
            "locator": {"elementId": "demo-gradient-block"},
            "updated": [{"mode": "solid", "color": "#111"}]
        });

        let record: EditRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.element(), Some("demo-gradient-block"));
        assert!(record.matches("demo-gradient-block"));
        assert!(!record.matches("demo-other"));
    }

    #[test]
    fn test_unknown_type_does_not_panic() {
        let raw = json!({"type": "shadow", "elementId": "x", "updated": {}});
        let record: EditRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.kind, EditKind::Unknown);
    }

    #[test]
    fn test_missing_type_is_unknown() {
        let raw = json!({"elementId": "x"});
        let record: EditRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.kind, EditKind::Unknown);
        assert!(record.original.is_null());
    }

    #[test]
    fn test_changes_expose_per_state_deltas() {
        let raw = json!({
            "type": "element",
            "elementId": "btn",
            "updated": {"states": {"hover": {"border": {"width": "2px"}}}},
            "changes": {"states": {"hover": {"border": {"width": "2px"}}}}
        });

        let record: EditRecord = serde_json::from_value(raw).unwrap();
        let change = record.state_change("hover").unwrap();
        assert_eq!(change.border.as_ref().unwrap()["width"], "2px");
        assert!(record.state_change("default").is_none());
    }
}
