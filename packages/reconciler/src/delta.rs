//! # Delta Engine
//!
//! The change-detection primitive behind every category filter and the
//! top-level drop-if-unchanged gate. Injected as a trait so hosts can swap
//! the comparison policy without touching the reconciler.

use serde_json::{Map, Value};
use situ_model::json_eq;

/// Computes the changed subset between two JSON values.
pub trait DeltaEngine {
    /// The subset of `updated` whose values differ from `original` at
    /// matching keys or array positions. Whole value on a type mismatch,
    /// whole array on a length mismatch, empty object when `updated` is
    /// null or nothing changed.
    fn compute(&self, original: &Value, updated: &Value) -> Value;

    /// Serialized inequality. Used where an explicit clear (empty array
    /// against non-empty original) must still register as a change.
    fn differs(&self, original: &Value, updated: &Value) -> bool {
        !json_eq(original, updated)
    }
}

/// Default stringify-equality delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDelta;

impl DeltaEngine for JsonDelta {
    fn compute(&self, original: &Value, updated: &Value) -> Value {
        if updated.is_null() || json_eq(original, updated) {
            return Value::Object(Map::new());
        }

        match (original, updated) {
            (Value::Object(from), Value::Object(to)) => {
                let mut delta = Map::new();
                for (key, value) in to {
                    let base = from.get(key).unwrap_or(&Value::Null);
                    if !json_eq(base, value) {
                        delta.insert(key.clone(), value.clone());
                    }
                }
                Value::Object(delta)
            }
            (Value::Array(from), Value::Array(to)) => {
                if from.len() != to.len() {
                    return updated.clone();
                }
                let changed: Vec<Value> = from
                    .iter()
                    .zip(to)
                    .filter(|(base, value)| !json_eq(base, value))
                    .map(|(_, value)| value.clone())
                    .collect();
                Value::Array(changed)
            }
            _ => updated.clone(),
        }
    }
}
