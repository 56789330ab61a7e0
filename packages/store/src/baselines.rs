//! Baseline lookup. In the browser the baseline rides on a DOM attribute;
//! here hosts supply one through a trait, typically from a captured JSON
//! map of element id to snapshot.

use crate::errors::StoreResult;
use situ_model::{Baseline, ModelError};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub trait BaselineSource {
    fn baseline_for(&self, element_id: &str) -> Option<Baseline>;
}

/// Baselines from a JSON file shaped
/// `{ "<elementId>": { "states": { "default": {...} } } }`.
#[derive(Debug, Clone, Default)]
pub struct StaticBaselines {
    by_element: BTreeMap<String, Baseline>,
}

impl StaticBaselines {
    pub fn parse(raw: &str) -> StoreResult<Self> {
        let by_element =
            serde_json::from_str(raw).map_err(ModelError::InvalidBaseline)?;
        Ok(Self { by_element })
    }

    pub fn from_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn len(&self) -> usize {
        self.by_element.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_element.is_empty()
    }
}

impl BaselineSource for StaticBaselines {
    fn baseline_for(&self, element_id: &str) -> Option<Baseline> {
        self.by_element.get(element_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use situ_model::Category;

    const SAMPLE: &str = r##"{
        "demo-border-card": {"states": {"default": {"border": {"width": "1px"}}}},
        "demo-color-block": {"states": {"default": {"fill": [{"mode": "solid", "color": "#EF9108"}]}}}
    }"##;

    #[test]
    fn test_lookup_by_element_id() {
        let baselines = StaticBaselines::parse(SAMPLE).unwrap();
        assert_eq!(baselines.len(), 2);

        let border = baselines.baseline_for("demo-border-card").unwrap();
        assert_eq!(
            border.default_category(Category::Border).unwrap()["width"],
            "1px"
        );
        assert!(baselines.baseline_for("unknown").is_none());
    }

    #[test]
    fn test_file_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("baselines.json");
        fs::write(&path, SAMPLE).unwrap();

        let baselines = StaticBaselines::from_file(&path).unwrap();
        assert!(!baselines.is_empty());
        assert!(StaticBaselines::from_file(dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_malformed_map_is_a_model_error() {
        assert!(StaticBaselines::parse("[1, 2, 3]").is_err());
        assert!(StaticBaselines::parse("{nope").is_err());
    }
}
