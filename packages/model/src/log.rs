//! The persisted edit log: `{ "editsArray": [ EditRecord, ... ] }`, stored
//! under the `situ-edits` key. Read-only from this subsystem's perspective;
//! the editor UI appends, undo/discard removes.

use crate::edit::EditRecord;
use crate::errors::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

pub const EDIT_LOG_KEY: &str = "situ-edits";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditLog {
    #[serde(rename = "editsArray", default)]
    pub edits: Vec<EditRecord>,
}

impl EditLog {
    pub fn parse(raw: &str) -> ModelResult<Self> {
        serde_json::from_str(raw).map_err(ModelError::InvalidEditLog)
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Records targeting one element, in log order.
    pub fn for_element(&self, element_id: &str) -> impl Iterator<Item = &EditRecord> + '_ {
        let element_id = element_id.to_owned();
        self.edits
            .iter()
            .filter(move |record| record.matches(&element_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_edits_array() {
        let raw = r#"{"editsArray": [{"type": "border", "elementId": "card", "updated": {"width": "2px"}}]}"#;
        let log = EditLog::parse(raw).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.for_element("card").count(), 1);
        assert_eq!(log.for_element("other").count(), 0);
    }

    #[test]
    fn test_missing_array_defaults_empty() {
        let log = EditLog::parse("{}").unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_malformed_log_is_an_error() {
        assert!(EditLog::parse("not json").is_err());
        assert!(EditLog::parse(r#"{"editsArray": 5}"#).is_err());
    }
}
