//! Cheap per-element queries over the edit log, for callers that only need
//! to know *whether* something changed (badges, conditional styling) and
//! not the full delta pair.

use crate::focus::CategoryFocus;
use situ_model::{Category, EditLog};

/// Summary of an element's standing in the edit log.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleState {
    /// True when at least one record carries a displayable change.
    pub edited: bool,
    /// Categories with at least one matching record, in canonical order.
    pub categories: Vec<Category>,
    /// Latest `timestamp` among matching records, epoch milliseconds.
    pub last_timestamp: Option<i64>,
}

pub fn style_state(log: &EditLog, element_id: &str) -> StyleState {
    let mut state = StyleState::default();

    for category in Category::ALL {
        let focus = CategoryFocus::single(category);
        if log
            .for_element(element_id)
            .any(|record| focus.matches_record(record))
        {
            state.categories.push(category);
        }
    }

    let unified = CategoryFocus::unified();
    for record in log.for_element(element_id) {
        if unified.matches_record(record) {
            state.edited = true;
            if record.timestamp > state.last_timestamp {
                state.last_timestamp = record.timestamp;
            }
        }
    }

    state
}

/// Whether any record changes the element's border, in either the legacy
/// flat format or the unified per-state format.
pub fn border_changed(log: &EditLog, element_id: &str) -> bool {
    let focus = CategoryFocus::single(Category::Border);
    log.for_element(element_id)
        .any(|record| focus.matches_record(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use situ_model::EditRecord;

    fn log_of(raw: serde_json::Value) -> EditLog {
        let edits = raw
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| serde_json::from_value::<EditRecord>(entry.clone()).unwrap())
            .collect();
        EditLog { edits }
    }

    #[test]
    fn test_reports_edited_categories_and_latest_timestamp() {
        let log = log_of(json!([
            {
                "type": "element",
                "elementId": "card",
                "timestamp": 100,
                "updated": {"states": {"default": {"fill": [{"mode": "solid", "color": "#111"}]}}}
            },
            {
                "type": "border",
                "elementId": "card",
                "timestamp": 300,
                "updated": {"width": "2px"}
            },
            {
                "type": "border",
                "elementId": "other",
                "timestamp": 900,
                "updated": {"width": "9px"}
            }
        ]));

        let state = style_state(&log, "card");
        assert!(state.edited);
        assert_eq!(state.categories, vec![Category::Fill, Category::Border]);
        assert_eq!(state.last_timestamp, Some(300));
    }

    #[test]
    fn test_untouched_element_is_clean() {
        let log = log_of(json!([
            {"type": "fill", "elementId": "card", "updated": [{"mode": "solid", "color": "#111"}]}
        ]));

        let state = style_state(&log, "missing");
        assert!(!state.edited);
        assert!(state.categories.is_empty());
        assert!(state.last_timestamp.is_none());
    }

    #[test]
    fn test_border_changed_sees_both_formats() {
        let legacy = log_of(json!([
            {"type": "border", "elementId": "a", "updated": {"width": "2px"}}
        ]));
        let unified = log_of(json!([
            {
                "type": "element",
                "elementId": "b",
                "updated": {"states": {"hover": {"border": {"width": "2px"}}}}
            }
        ]));
        let unrelated = log_of(json!([
            {"type": "fill", "elementId": "c", "updated": [{"mode": "solid", "color": "#111"}]}
        ]));

        assert!(border_changed(&legacy, "a"));
        assert!(border_changed(&unified, "b"));
        assert!(!border_changed(&unrelated, "c"));
    }
}
