//! States and categories.
//!
//! A "state" is a named style variant (`default`, `hover`, ...), not UI
//! state. A "category" is one of the five semantic style groups an edit can
//! touch. The `default` state is privileged throughout the reconciler: its
//! original values preferentially come from the baseline snapshot.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const DEFAULT_STATE: &str = "default";

/// Layout keys recognized by the legacy formatted view. Anything else is
/// dropped there; the simple diff view has no such restriction.
pub const LAYOUT_ALLOWED: [&str; 15] = [
    "display",
    "flexDirection",
    "gap",
    "rowGap",
    "columnGap",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "width",
    "height",
];

pub fn layout_key_allowed(key: &str) -> bool {
    LAYOUT_ALLOWED.contains(&key)
}

/// One semantic style group within a state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fill,
    Appearance,
    Typography,
    Border,
    Layout,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Fill,
        Category::Appearance,
        Category::Typography,
        Category::Border,
        Category::Layout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fill => "fill",
            Category::Appearance => "appearance",
            Category::Typography => "typography",
            Category::Border => "border",
            Category::Layout => "layout",
        }
    }

    pub fn parse(name: &str) -> Option<Category> {
        match name {
            "fill" => Some(Category::Fill),
            "appearance" => Some(Category::Appearance),
            "typography" => Some(Category::Typography),
            "border" => Some(Category::Border),
            "layout" => Some(Category::Layout),
            _ => None,
        }
    }

    /// Whether a value has this category's shape: fills are layer arrays,
    /// every other category is a style object. Empty collections qualify,
    /// a cleared fill is still fill data.
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            Category::Fill => value.is_array(),
            _ => value.is_object(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `states` map of a unified-format payload (`{states: {...}}`).
pub fn states_of(payload: &Value) -> Option<&Map<String, Value>> {
    payload.get("states")?.as_object()
}

/// One named state snapshot out of a unified-format payload.
pub fn state_snapshot<'a>(payload: &'a Value, state: &str) -> Option<&'a Value> {
    states_of(payload)?.get(state)
}

/// One category's value inside a state snapshot.
pub fn snapshot_category<'a>(snapshot: &'a Value, category: Category) -> Option<&'a Value> {
    snapshot.get(category.as_str())
}
