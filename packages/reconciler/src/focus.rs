//! Category focus: which semantic categories a viewer displays, and the
//! record predicate derived from it. A fill viewer only resolves records
//! carrying fill data; the unified viewer accepts everything.

use serde_json::Value;
use situ_model::{snapshot_category, states_of, Category, EditKind, EditRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFocus {
    categories: Vec<Category>,
}

impl CategoryFocus {
    /// All five categories. Drives the unified viewer.
    pub fn unified() -> Self {
        Self {
            categories: Category::ALL.to_vec(),
        }
    }

    pub fn single(category: Category) -> Self {
        Self {
            categories: vec![category],
        }
    }

    pub fn of(categories: &[Category]) -> Self {
        Self {
            categories: categories.to_vec(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn includes(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Legacy record kinds matched directly by type.
    pub fn accepts_kind(&self, kind: EditKind) -> bool {
        match kind {
            EditKind::Element => true,
            EditKind::Fill | EditKind::Fills => self.includes(Category::Fill),
            EditKind::Border => self.includes(Category::Border),
            // Typed-input records back the typography and layout demos
            EditKind::Inputs => {
                self.includes(Category::Typography) || self.includes(Category::Layout)
            }
            EditKind::Unknown => false,
        }
    }

    /// The resolve predicate: a record is displayable when its `updated`
    /// side carries a focused category in that category's shape. Empty
    /// collections still match; a record that only clears a fill must
    /// resolve so the clear can be shown.
    pub fn matches_record(&self, record: &EditRecord) -> bool {
        if record.updated.is_null() || !self.accepts_kind(record.kind) {
            return false;
        }
        match record.kind {
            EditKind::Element => self.matches_states(&record.updated),
            EditKind::Fill | EditKind::Fills => record.updated.is_array(),
            EditKind::Border => record.updated.is_object(),
            _ => true,
        }
    }

    fn matches_states(&self, updated: &Value) -> bool {
        let Some(states) = states_of(updated) else {
            return false;
        };
        states.values().any(|snapshot| {
            self.categories.iter().any(|category| {
                snapshot_category(snapshot, *category)
                    .map(|value| category.admits(value))
                    .unwrap_or(false)
            })
        })
    }
}

impl Default for CategoryFocus {
    fn default() -> Self {
        Self::unified()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(raw: serde_json::Value) -> EditRecord {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_legacy_kinds_match_by_type() {
        let fill = record(json!({"type": "fill", "elementId": "x", "updated": [{"color": "#111"}]}));
        assert!(CategoryFocus::single(Category::Fill).matches_record(&fill));
        assert!(!CategoryFocus::single(Category::Border).matches_record(&fill));
        assert!(CategoryFocus::unified().matches_record(&fill));

        let inputs = record(json!({"type": "inputs", "elementId": "x", "updated": {"fontSize": "18px"}}));
        assert!(CategoryFocus::single(Category::Typography).matches_record(&inputs));
        assert!(CategoryFocus::single(Category::Layout).matches_record(&inputs));
        assert!(!CategoryFocus::single(Category::Fill).matches_record(&inputs));
    }

    #[test]
    fn test_element_records_match_on_category_shape() {
        let edit = record(json!({
            "type": "element",
            "elementId": "x",
            "updated": {"states": {"hover": {"border": {"width": "2px"}}, "default": {"fill": []}}}
        }));

        assert!(CategoryFocus::single(Category::Border).matches_record(&edit));
        // An empty fill array is a clear, not an absence
        assert!(CategoryFocus::single(Category::Fill).matches_record(&edit));
        assert!(!CategoryFocus::single(Category::Typography).matches_record(&edit));
        assert!(CategoryFocus::unified().matches_record(&edit));
    }

    #[test]
    fn test_mis_shaped_categories_do_not_match() {
        let edit = record(json!({
            "type": "element",
            "elementId": "x",
            "updated": {"states": {"default": {"fill": {"color": "#111"}, "border": null}}}
        }));
        assert!(!CategoryFocus::unified().matches_record(&edit));

        let flat = record(json!({"type": "fill", "elementId": "x", "updated": {"color": "#111"}}));
        assert!(!CategoryFocus::single(Category::Fill).matches_record(&flat));
    }

    #[test]
    fn test_null_updated_never_matches() {
        let edit = record(json!({"type": "border", "elementId": "x"}));
        assert!(!CategoryFocus::unified().matches_record(&edit));
    }

    #[test]
    fn test_unknown_kind_never_matches() {
        let edit = record(json!({"type": "shadow", "elementId": "x", "updated": {"blur": "2px"}}));
        assert!(!CategoryFocus::unified().matches_record(&edit));
    }
}
