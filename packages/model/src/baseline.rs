//! The baseline snapshot: the `data-original-element` JSON attribute written
//! once at first style computation. Ground-truth "original" for the default
//! state when a record's own `original` is absent or stale.

use crate::errors::{ModelError, ModelResult};
use crate::states::{snapshot_category, Category, DEFAULT_STATE};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const BASELINE_ATTR: &str = "data-original-element";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Baseline {
    #[serde(default)]
    pub states: Map<String, Value>,
}

impl Baseline {
    pub fn parse(raw: &str) -> ModelResult<Self> {
        serde_json::from_str(raw).map_err(ModelError::InvalidBaseline)
    }

    pub fn state(&self, name: &str) -> Option<&Value> {
        self.states.get(name)
    }

    pub fn default_state(&self) -> Option<&Value> {
        self.state(DEFAULT_STATE)
    }

    /// One category's value under the default state.
    pub fn default_category(&self, category: Category) -> Option<&Value> {
        snapshot_category(self.default_state()?, category)
    }
}
