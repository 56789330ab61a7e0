//! # Fill Normalization
//!
//! Fill layers are ordered paint descriptors (solid colors or gradients).
//! Gradients arrive with uneven defaults depending on which editor surface
//! wrote them, so both sides are canonicalized before comparison; internal
//! bookkeeping fields are stripped before display. Injected as a trait so
//! hosts can supply their own pipeline.

use serde_json::{Map, Value};

/// Normalize / prune / merge pipeline for fill-layer arrays.
pub trait FillNormalizer {
    /// Canonicalizes gradient defaults so unrelated default differences do
    /// not show up as diffs. Solid layers pass through untouched.
    fn normalize(&self, fills: &[Value]) -> Vec<Value>;

    /// Strips internal-only fields from one layer before display.
    fn prune(&self, fill: &Value) -> Value;

    /// Reconciles a sparse update list against a full baseline list.
    fn merge(&self, baseline: &[Value], updates: &[Value]) -> Vec<Value>;

    fn prune_all(&self, fills: &[Value]) -> Vec<Value> {
        fills.iter().map(|fill| self.prune(fill)).collect()
    }
}

/// Default pipeline: gradient `type` aliasing, linear-angle and stop-opacity
/// defaults, `id`/underscore-prefixed field pruning, updates-win merging.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientFills;

impl FillNormalizer for GradientFills {
    fn normalize(&self, fills: &[Value]) -> Vec<Value> {
        fills.iter().map(normalize_layer).collect()
    }

    fn prune(&self, fill: &Value) -> Value {
        let Value::Object(layer) = fill else {
            return fill.clone();
        };

        let mut pruned = prune_object(layer);
        if let Some(Value::Object(gradient)) = pruned.get("gradient").cloned() {
            let mut gradient = prune_object(&gradient);
            if let Some(Value::Array(stops)) = gradient.get("stops").cloned() {
                let stops: Vec<Value> = stops
                    .iter()
                    .map(|stop| match stop {
                        Value::Object(map) => Value::Object(prune_object(map)),
                        other => other.clone(),
                    })
                    .collect();
                gradient.insert("stops".to_string(), Value::Array(stops));
            }
            pruned.insert("gradient".to_string(), Value::Object(gradient));
        }
        Value::Object(pruned)
    }

    fn merge(&self, baseline: &[Value], updates: &[Value]) -> Vec<Value> {
        // Updates are authoritative when present; an empty update list keeps
        // the baseline layers.
        if updates.is_empty() {
            baseline.to_vec()
        } else {
            updates.to_vec()
        }
    }
}

fn normalize_layer(layer: &Value) -> Value {
    let Value::Object(map) = layer else {
        return layer.clone();
    };
    let Some(Value::Object(gradient)) = map.get("gradient") else {
        return layer.clone();
    };

    let mut gradient = gradient.clone();

    // Some writers record `gradientType` instead of `type`
    if !gradient.contains_key("type") {
        if let Some(kind) = gradient.remove("gradientType") {
            gradient.insert("type".to_string(), kind);
        }
    }

    if gradient.get("type").and_then(Value::as_str) == Some("linear")
        && !gradient.contains_key("angle")
    {
        gradient.insert("angle".to_string(), Value::from(0));
    }

    if let Some(Value::Array(stops)) = gradient.get("stops").cloned() {
        let stops: Vec<Value> = stops
            .iter()
            .map(|stop| match stop {
                Value::Object(stop_map) => {
                    let mut stop_map = stop_map.clone();
                    stop_map
                        .entry("opacity".to_string())
                        .or_insert_with(|| Value::from(1));
                    Value::Object(stop_map)
                }
                other => other.clone(),
            })
            .collect();
        gradient.insert("stops".to_string(), Value::Array(stops));
    }

    let mut normalized = map.clone();
    normalized.insert("gradient".to_string(), Value::Object(gradient));
    Value::Object(normalized)
}

fn prune_object(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .filter(|(key, _)| key.as_str() != "id" && !key.starts_with('_'))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
