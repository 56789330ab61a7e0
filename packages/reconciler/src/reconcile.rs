//! # Edit Reconciliation
//!
//! Turns the persisted edit log plus a per-element baseline snapshot into a
//! `{original, updated}` delta pair ready for diff rendering.
//!
//! Shape of the simple diff pair: the `default` state's categories sit flat
//! at the top level (`{fill: [...], border: {...}}`); non-default states
//! nest under a `states` key. A second delta pass over the assembled
//! candidates drops unchanged top-level keys uniformly, which is what makes
//! the zero-diff collapse observable as `"{}"` on both sides.

use crate::delta::{DeltaEngine, JsonDelta};
use crate::errors::{Notice, ReconcileResult};
use crate::fills::{FillNormalizer, GradientFills};
use crate::focus::CategoryFocus;
use serde::Serialize;
use serde_json::{Map, Value};
use situ_model::{
    json_eq, layout_key_allowed, loose_eq, non_empty, snapshot_category, state_snapshot,
    states_of, stringify, Baseline, Category, EditKind, EditLog, EditRecord, DEFAULT_STATE,
};
use tracing::{debug, instrument, warn};

/// Both sides of a reconciled delta, JSON-serializable for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffPair {
    pub original: Value,
    pub updated: Value,
}

impl DiffPair {
    pub fn empty() -> Self {
        Self {
            original: Value::Object(Map::new()),
            updated: Value::Object(Map::new()),
        }
    }

    /// True when both sides serialize to the literal `"{}"`.
    pub fn is_zero(&self) -> bool {
        stringify(&self.original) == "{}" && stringify(&self.updated) == "{}"
    }

    /// A zero-diff pair echoing one value on both sides under its category.
    pub fn echo(category: Category, value: Value) -> Self {
        let mut side = Map::new();
        side.insert(category.as_str().to_string(), value);
        Self {
            original: Value::Object(side.clone()),
            updated: Value::Object(side),
        }
    }
}

/// What the reconciler decided to display.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation {
    /// A real delta from the active edit record.
    Diff {
        pair: DiffPair,
        timestamp: Option<i64>,
    },
    /// Nothing changed (or no record matched): the baseline's most relevant
    /// category echoed identically on both sides.
    BaselineEcho { category: Category, pair: DiffPair },
    /// Nothing to diff at all; display the sentinel message.
    Notice(Notice),
}

/// The reconciliation engine. Pure and synchronous; every call recomputes
/// from scratch. Comparison and fill policies are injected.
pub struct EditReconciler<D = JsonDelta, F = GradientFills>
where
    D: DeltaEngine,
    F: FillNormalizer,
{
    focus: CategoryFocus,
    delta: D,
    fills: F,
}

impl EditReconciler {
    pub fn new(focus: CategoryFocus) -> Self {
        Self {
            focus,
            delta: JsonDelta,
            fills: GradientFills,
        }
    }

    pub fn unified() -> Self {
        Self::new(CategoryFocus::unified())
    }
}

impl Default for EditReconciler {
    fn default() -> Self {
        Self::unified()
    }
}

impl<D, F> EditReconciler<D, F>
where
    D: DeltaEngine,
    F: FillNormalizer,
{
    pub fn with_engines(focus: CategoryFocus, delta: D, fills: F) -> Self {
        Self { focus, delta, fills }
    }

    pub fn focus(&self) -> &CategoryFocus {
        &self.focus
    }

    /// First record in log order that targets the element and satisfies the
    /// focus predicate. Later records for the same element and category are
    /// ignored.
    pub fn resolve_edit<'a>(&self, log: &'a EditLog, element_id: &str) -> Option<&'a EditRecord> {
        log.edits
            .iter()
            .find(|record| record.matches(element_id) && self.focus.matches_record(record))
    }

    /// Top boundary for display callers. Parses raw inputs and maps every
    /// failure into a sentinel; never panics, never propagates.
    #[instrument(skip_all, fields(element_id = %element_id))]
    pub fn reconcile(
        &self,
        log_raw: Option<&str>,
        element_id: &str,
        baseline_raw: Option<&str>,
    ) -> Reconciliation {
        match self.try_reconcile(log_raw, element_id, baseline_raw) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "reconciliation failed, degrading to sentinel");
                Reconciliation::Notice(Notice::ParseFailure(err.to_string()))
            }
        }
    }

    fn try_reconcile(
        &self,
        log_raw: Option<&str>,
        element_id: &str,
        baseline_raw: Option<&str>,
    ) -> ReconcileResult<Reconciliation> {
        // A malformed baseline is treated as a missing one; a malformed log
        // surfaces as the parse-failure sentinel via the caller's catch.
        let baseline = baseline_raw.and_then(|raw| match Baseline::parse(raw) {
            Ok(baseline) => Some(baseline),
            Err(err) => {
                debug!(error = %err, "ignoring unparseable baseline");
                None
            }
        });

        let log = match log_raw {
            Some(raw) => EditLog::parse(raw)?,
            None => EditLog::default(),
        };

        Ok(self.reconcile_parsed(&log, element_id, baseline.as_ref()))
    }

    /// Typed entry point for callers that already hold parsed inputs.
    pub fn reconcile_parsed(
        &self,
        log: &EditLog,
        element_id: &str,
        baseline: Option<&Baseline>,
    ) -> Reconciliation {
        let Some(record) = self.resolve_edit(log, element_id) else {
            debug!("no matching record, falling back to baseline display");
            return self.baseline_only(element_id, baseline);
        };

        let pair = match record.kind {
            EditKind::Element => self.build_top_level_delta(record, baseline),
            EditKind::Fill | EditKind::Fills => self.legacy_fill_pair(record),
            EditKind::Border => self.legacy_border_pair(record),
            EditKind::Inputs => self.inputs_pair(record),
            EditKind::Unknown => DiffPair::empty(),
        };

        if pair.is_zero() {
            debug!("record reconciled to zero diff, collapsing to baseline");
            if let Some((category, value)) = baseline.and_then(collapse_category) {
                return Reconciliation::BaselineEcho {
                    category,
                    pair: DiffPair::echo(category, value),
                };
            }
            return Reconciliation::Notice(Notice::NoEditsUsingDefaults);
        }

        Reconciliation::Diff {
            pair,
            timestamp: record.timestamp,
        }
    }

    /// One state's category-filtered delta, both sides at once. A category
    /// appears on both sides or neither; zero-difference categories drop.
    pub fn compute_state_delta(
        &self,
        record: &EditRecord,
        state: &str,
        baseline: Option<&Baseline>,
    ) -> (Map<String, Value>, Map<String, Value>) {
        let mut original_out = Map::new();
        let mut updated_out = Map::new();

        let updated_snapshot = state_snapshot(&record.updated, state);
        let is_default = state == DEFAULT_STATE;

        for category in self.focus.categories() {
            let updated_value =
                updated_snapshot.and_then(|snapshot| snapshot_category(snapshot, *category));
            let effective_original = effective_original(record, state, *category, baseline);

            match category {
                Category::Fill => {
                    let Some(updated_fills) = updated_value.and_then(Value::as_array) else {
                        continue;
                    };
                    let original_fills = effective_original
                        .and_then(Value::as_array)
                        .cloned()
                        .unwrap_or_default();

                    let original_ready =
                        self.fills.prune_all(&self.fills.normalize(&original_fills));
                    let updated_ready =
                        self.fills.prune_all(&self.fills.normalize(updated_fills));

                    let original_side = Value::Array(original_ready);
                    let updated_side = Value::Array(updated_ready);
                    // Inequality, not subset-delta emptiness: an explicit
                    // clear ([] against layers) must register as a change.
                    if self.delta.differs(&original_side, &updated_side) {
                        original_out.insert("fill".to_string(), original_side);
                        updated_out.insert("fill".to_string(), updated_side);
                    }
                }

                Category::Appearance => {
                    let Some(updated_obj) = updated_value.and_then(Value::as_object) else {
                        continue;
                    };
                    let base = effective_original
                        .and_then(Value::as_object)
                        .cloned()
                        .unwrap_or_default();

                    // Appearance is merged wholesale, never key-filtered
                    let mut merged = base.clone();
                    for (key, value) in updated_obj {
                        merged.insert(key.clone(), value.clone());
                    }

                    let original_side = Value::Object(base);
                    let updated_side = Value::Object(merged);
                    if self.delta.differs(&original_side, &updated_side) {
                        original_out.insert("appearance".to_string(), original_side);
                        updated_out.insert("appearance".to_string(), updated_side);
                    }
                }

                Category::Typography | Category::Border | Category::Layout => {
                    // Persisted per-state deltas take precedence over
                    // snapshot comparison for non-default states.
                    if !is_default {
                        if let Some(recorded) = recorded_change(record, state, *category) {
                            self.apply_recorded_change(
                                *category,
                                effective_original,
                                recorded,
                                &mut original_out,
                                &mut updated_out,
                            );
                            continue;
                        }
                    }

                    let Some(updated_obj) = updated_value.and_then(Value::as_object) else {
                        continue;
                    };

                    let original_obj = effective_original.and_then(Value::as_object);
                    let (original_keys, updated_keys) =
                        key_wise_delta(original_obj, updated_obj);
                    if !updated_keys.is_empty() {
                        original_out
                            .insert(category.as_str().to_string(), Value::Object(original_keys));
                        updated_out
                            .insert(category.as_str().to_string(), Value::Object(updated_keys));
                    }
                }
            }
        }

        (original_out, updated_out)
    }

    /// A persisted `changes.states[name]` delta is authoritative for the
    /// updated side: applied over the state's own original, then gated.
    fn apply_recorded_change(
        &self,
        category: Category,
        effective_original: Option<&Value>,
        recorded: &Value,
        original_out: &mut Map<String, Value>,
        updated_out: &mut Map<String, Value>,
    ) {
        let Some(recorded_obj) = recorded.as_object() else {
            return;
        };
        let base = effective_original
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let mut applied = base.clone();
        for (key, value) in recorded_obj {
            applied.insert(key.clone(), value.clone());
        }

        let original_side = Value::Object(base);
        let updated_side = Value::Object(applied);
        if self.delta.differs(&original_side, &updated_side) {
            original_out.insert(category.as_str().to_string(), original_side);
            updated_out.insert(category.as_str().to_string(), updated_side);
        }
    }

    /// Assembles per-state deltas into the displayed pair: default-state
    /// categories flat at the top level, other states nested under
    /// `states`, then the uniform top-level drop-if-unchanged gate.
    pub fn build_top_level_delta(
        &self,
        record: &EditRecord,
        baseline: Option<&Baseline>,
    ) -> DiffPair {
        let mut original_candidate = Map::new();
        let mut updated_candidate = Map::new();
        let mut original_states = Map::new();
        let mut updated_states = Map::new();

        for state in state_names(record) {
            let (original_delta, updated_delta) =
                self.compute_state_delta(record, &state, baseline);
            if original_delta.is_empty() && updated_delta.is_empty() {
                continue;
            }

            if state == DEFAULT_STATE {
                original_candidate.extend(original_delta);
                updated_candidate.extend(updated_delta);
            } else {
                original_states.insert(state.clone(), Value::Object(original_delta));
                updated_states.insert(state, Value::Object(updated_delta));
            }
        }

        if !original_states.is_empty() || !updated_states.is_empty() {
            original_candidate.insert("states".to_string(), Value::Object(original_states));
            updated_candidate.insert("states".to_string(), Value::Object(updated_states));
        }

        let original_candidate = Value::Object(original_candidate);
        let updated_candidate = Value::Object(updated_candidate);

        // Which top-level keys survive is decided by one more delta pass
        let gate = self.delta.compute(&original_candidate, &updated_candidate);
        let mut original_final = Map::new();
        let mut updated_final = Map::new();
        if let (Some(gate_obj), Some(original_obj), Some(updated_obj)) = (
            gate.as_object(),
            original_candidate.as_object(),
            updated_candidate.as_object(),
        ) {
            for key in gate_obj.keys() {
                if let Some(value) = original_obj.get(key) {
                    original_final.insert(key.clone(), value.clone());
                }
                if let Some(value) = updated_obj.get(key) {
                    updated_final.insert(key.clone(), value.clone());
                }
            }
        }

        DiffPair {
            original: Value::Object(original_final),
            updated: Value::Object(updated_final),
        }
    }

    /// Legacy flat fill arrays: updates merged over the original layers,
    /// both sides pruned, gated on the pruned delta.
    fn legacy_fill_pair(&self, record: &EditRecord) -> DiffPair {
        let original: Vec<Value> = record
            .original
            .as_array()
            .cloned()
            .unwrap_or_default();
        let updated: Vec<Value> = record.updated.as_array().cloned().unwrap_or_default();

        let merged = self.fills.merge(&original, &updated);
        let pruned_original = self.fills.prune_all(&original);
        let pruned_merged = self.fills.prune_all(&merged);

        let delta = self.delta.compute(
            &Value::Array(pruned_original.clone()),
            &Value::Array(pruned_merged.clone()),
        );
        if !non_empty(&delta) {
            return DiffPair::empty();
        }

        let mut original_side = Map::new();
        original_side.insert("fill".to_string(), Value::Array(pruned_original));
        let mut updated_side = Map::new();
        updated_side.insert("fill".to_string(), Value::Array(pruned_merged));
        DiffPair {
            original: Value::Object(original_side),
            updated: Value::Object(updated_side),
        }
    }

    /// Legacy flat border objects, loosely compared, wrapped in the
    /// one-element array shape the legacy viewer payloads used.
    fn legacy_border_pair(&self, record: &EditRecord) -> DiffPair {
        let original = record.original.as_object().cloned().unwrap_or_default();
        let Some(updated) = record.updated.as_object() else {
            return DiffPair::empty();
        };

        let mut delta = Map::new();
        for (key, value) in updated {
            let base = original.get(key).unwrap_or(&Value::Null);
            if !loose_eq(base, value) {
                delta.insert(key.clone(), value.clone());
            }
        }
        if delta.is_empty() {
            return DiffPair::empty();
        }

        let mut original_entry = Map::new();
        original_entry.insert("border".to_string(), Value::Object(original));
        let mut updated_entry = Map::new();
        updated_entry.insert("border".to_string(), Value::Object(delta));
        DiffPair {
            original: Value::Array(vec![Value::Object(original_entry)]),
            updated: Value::Array(vec![Value::Object(updated_entry)]),
        }
    }

    /// Typed-input records are echoed verbatim, no filtering.
    fn inputs_pair(&self, record: &EditRecord) -> DiffPair {
        DiffPair {
            original: record.original.clone(),
            updated: record.updated.clone(),
        }
    }

    /// The legacy formatted presentation: every state nested under
    /// `states`, unchanged categories echoed, layout keys restricted to the
    /// recognized allow-list on both sides.
    pub fn formatted_view(&self, record: &EditRecord, baseline: Option<&Baseline>) -> DiffPair {
        match record.kind {
            EditKind::Element => {}
            EditKind::Fill | EditKind::Fills => return self.legacy_fill_pair(record),
            EditKind::Border => return self.legacy_border_pair(record),
            EditKind::Inputs => return self.inputs_pair(record),
            EditKind::Unknown => return DiffPair::empty(),
        }

        let mut original_states = Map::new();
        let mut updated_states = Map::new();

        for state in state_names(record) {
            let (original_formatted, updated_formatted) =
                self.format_state(record, &state, baseline);
            if original_formatted.is_empty() && updated_formatted.is_empty() {
                continue;
            }
            original_states.insert(state.clone(), Value::Object(original_formatted));
            updated_states.insert(state, Value::Object(updated_formatted));
        }

        let mut original = Map::new();
        original.insert("states".to_string(), Value::Object(original_states));
        let mut updated = Map::new();
        updated.insert("states".to_string(), Value::Object(updated_states));
        DiffPair {
            original: Value::Object(original),
            updated: Value::Object(updated),
        }
    }

    fn format_state(
        &self,
        record: &EditRecord,
        state: &str,
        baseline: Option<&Baseline>,
    ) -> (Map<String, Value>, Map<String, Value>) {
        let mut original_out = Map::new();
        let mut updated_out = Map::new();
        let updated_snapshot = state_snapshot(&record.updated, state);

        for category in self.focus.categories() {
            let updated_value =
                updated_snapshot.and_then(|snapshot| snapshot_category(snapshot, *category));
            let effective_original = effective_original(record, state, *category, baseline);

            match category {
                Category::Fill => {
                    let original_fills = effective_original
                        .and_then(Value::as_array)
                        .cloned()
                        .unwrap_or_default();
                    let merged = match updated_value.and_then(Value::as_array) {
                        Some(updates) => self.fills.merge(&original_fills, updates),
                        None => original_fills.clone(),
                    };

                    let original_ready =
                        self.fills.prune_all(&self.fills.normalize(&original_fills));
                    let updated_ready = self.fills.prune_all(&self.fills.normalize(&merged));
                    if !original_ready.is_empty() || !updated_ready.is_empty() {
                        original_out.insert("fill".to_string(), Value::Array(original_ready));
                        updated_out.insert("fill".to_string(), Value::Array(updated_ready));
                    }
                }

                Category::Appearance | Category::Typography | Category::Border => {
                    let base = effective_original
                        .and_then(Value::as_object)
                        .cloned()
                        .unwrap_or_default();
                    let mut merged = base.clone();
                    if let Some(updated_obj) = updated_value.and_then(Value::as_object) {
                        for (key, value) in updated_obj {
                            merged.insert(key.clone(), value.clone());
                        }
                    }
                    if !base.is_empty() || !merged.is_empty() {
                        original_out
                            .insert(category.as_str().to_string(), Value::Object(base));
                        updated_out
                            .insert(category.as_str().to_string(), Value::Object(merged));
                    }
                }

                Category::Layout => {
                    let base = filter_layout(
                        effective_original
                            .and_then(Value::as_object)
                            .cloned()
                            .unwrap_or_default(),
                    );
                    let mut merged = base.clone();
                    if let Some(updated_obj) = updated_value.and_then(Value::as_object) {
                        for (key, value) in updated_obj {
                            if layout_key_allowed(key) {
                                merged.insert(key.clone(), value.clone());
                            }
                        }
                    }
                    if !base.is_empty() || !merged.is_empty() {
                        original_out.insert("layout".to_string(), Value::Object(base));
                        updated_out.insert("layout".to_string(), Value::Object(merged));
                    }
                }
            }
        }

        (original_out, updated_out)
    }

    /// No matching record: show the baseline category suggested by the
    /// element id, identical on both sides.
    fn baseline_only(&self, element_id: &str, baseline: Option<&Baseline>) -> Reconciliation {
        let Some(baseline) = baseline else {
            return Reconciliation::Notice(Notice::NoInspectorEdits);
        };
        let Some(category) = fallback_category(element_id) else {
            return Reconciliation::Notice(Notice::NoInspectorEdits);
        };
        match baseline
            .default_category(category)
            .filter(|value| category.admits(value))
        {
            Some(value) => Reconciliation::BaselineEcho {
                category,
                pair: DiffPair::echo(category, value.clone()),
            },
            None => Reconciliation::Notice(Notice::NoBaselineData),
        }
    }
}

/// State names present on any side of the record (snapshots and persisted
/// change deltas), in first-seen order, defaulting to `default` when none
/// are listed.
fn state_names(record: &EditRecord) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    };
    for payload in [&record.original, &record.updated] {
        if let Some(states) = states_of(payload) {
            for name in states.keys() {
                push(name);
            }
        }
    }
    if let Some(changes) = &record.changes {
        for name in changes.states.keys() {
            push(name);
        }
    }
    if names.is_empty() {
        names.push(DEFAULT_STATE.to_string());
    }
    names
}

/// Effective comparison base for one category of one state. The default
/// state prefers the baseline snapshot; other states use the record's own
/// original strictly.
fn effective_original<'a>(
    record: &'a EditRecord,
    state: &str,
    category: Category,
    baseline: Option<&'a Baseline>,
) -> Option<&'a Value> {
    let record_original =
        state_snapshot(&record.original, state).and_then(|s| snapshot_category(s, category));

    if state == DEFAULT_STATE {
        baseline
            .and_then(|b| b.default_category(category))
            .filter(|value| non_empty(value))
            .or(record_original)
    } else {
        record_original
    }
}

fn recorded_change<'a>(
    record: &'a EditRecord,
    state: &str,
    category: Category,
) -> Option<&'a Value> {
    let change = record.state_change(state)?;
    match category {
        Category::Border => change.border.as_ref(),
        Category::Typography => change.typography.as_ref(),
        _ => None,
    }
}

/// Keys of `updated` whose values differ from the original, mirrored onto
/// both sides. Keys new to `updated` appear on the updated side only.
fn key_wise_delta(
    original: Option<&Map<String, Value>>,
    updated: &Map<String, Value>,
) -> (Map<String, Value>, Map<String, Value>) {
    let mut original_keys = Map::new();
    let mut updated_keys = Map::new();

    for (key, value) in updated {
        match original.and_then(|map| map.get(key)) {
            Some(base) if json_eq(base, value) => {}
            Some(base) => {
                original_keys.insert(key.clone(), base.clone());
                updated_keys.insert(key.clone(), value.clone());
            }
            None => {
                updated_keys.insert(key.clone(), value.clone());
            }
        }
    }

    (original_keys, updated_keys)
}

fn filter_layout(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter(|(key, _)| layout_key_allowed(key))
        .collect()
}

/// Which element ids fall back to which baseline category. A documented
/// demo simplification, not a general classifier.
fn fallback_category(element_id: &str) -> Option<Category> {
    const LAYOUT_HINTS: [&str; 3] = ["layout", "grid", "flex"];
    const FILL_HINTS: [&str; 2] = ["color", "gradient"];
    const TYPOGRAPHY_HINTS: [&str; 2] = ["heading", "paragraph"];

    if LAYOUT_HINTS.iter().any(|hint| element_id.contains(hint)) {
        Some(Category::Layout)
    } else if FILL_HINTS.iter().any(|hint| element_id.contains(hint)) {
        Some(Category::Fill)
    } else if element_id.contains("border") {
        Some(Category::Border)
    } else if TYPOGRAPHY_HINTS.iter().any(|hint| element_id.contains(hint)) {
        Some(Category::Typography)
    } else {
        None
    }
}

/// The single most relevant baseline category for the zero-diff collapse.
/// Shape presence decides, so an empty baseline fill still wins over a
/// populated typography further down the precedence order.
fn collapse_category(baseline: &Baseline) -> Option<(Category, Value)> {
    for category in [Category::Fill, Category::Typography, Category::Layout] {
        if let Some(value) = baseline.default_category(category) {
            if category.admits(value) {
                return Some((category, value.clone()));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(raw: Value) -> EditRecord {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_default_state_prefers_baseline_over_record_original() {
        let edit = record(json!({
            "type": "element",
            "elementId": "demo-border-block",
            "original": {"states": {"default": {"border": {"width": "3px"}}}},
            "updated": {"states": {"default": {"border": {"width": "2px"}}}}
        }));
        let baseline =
            Baseline::parse(r#"{"states": {"default": {"border": {"width": "1px"}}}}"#).unwrap();

        let reconciler = EditReconciler::unified();
        let (original, updated) =
            reconciler.compute_state_delta(&edit, DEFAULT_STATE, Some(&baseline));

        assert_eq!(original["border"]["width"], "1px");
        assert_eq!(updated["border"]["width"], "2px");
    }

    #[test]
    fn test_non_default_state_ignores_baseline() {
        let edit = record(json!({
            "type": "element",
            "elementId": "x",
            "original": {"states": {"hover": {"border": {"width": "3px"}}}},
            "updated": {"states": {"hover": {"border": {"width": "2px"}}}}
        }));
        let baseline =
            Baseline::parse(r#"{"states": {"default": {"border": {"width": "1px"}}}}"#).unwrap();

        let reconciler = EditReconciler::unified();
        let (original, _) = reconciler.compute_state_delta(&edit, "hover", Some(&baseline));
        assert_eq!(original["border"]["width"], "3px");
    }

    #[test]
    fn test_unchanged_categories_drop_from_both_sides() {
        let edit = record(json!({
            "type": "element",
            "elementId": "x",
            "original": {"states": {"default": {
                "border": {"width": "1px"},
                "typography": {"fontSize": "14px"}
            }}},
            "updated": {"states": {"default": {
                "border": {"width": "1px"},
                "typography": {"fontSize": "18px"}
            }}}
        }));

        let reconciler = EditReconciler::unified();
        let (original, updated) = reconciler.compute_state_delta(&edit, DEFAULT_STATE, None);
        assert!(original.get("border").is_none());
        assert!(updated.get("border").is_none());
        assert_eq!(updated["typography"]["fontSize"], "18px");
    }

    #[test]
    fn test_explicit_fill_clear_is_preserved() {
        let edit = record(json!({
            "type": "element",
            "elementId": "x",
            "original": {"states": {"default": {"fill": [{"mode": "solid", "color": "#111"}], "border": {"width": "2px"}}}},
            "updated": {"states": {"default": {"fill": [], "border": {"width": "3px"}}}}
        }));

        let reconciler = EditReconciler::unified();
        let (original, updated) = reconciler.compute_state_delta(&edit, DEFAULT_STATE, None);
        assert_eq!(updated["fill"], json!([]));
        assert_eq!(original["fill"], json!([{"mode": "solid", "color": "#111"}]));
    }

    #[test]
    fn test_recorded_changes_win_for_non_default_states() {
        let edit = record(json!({
            "type": "element",
            "elementId": "x",
            "original": {"states": {"hover": {"border": {"width": "1px", "style": "solid"}}}},
            "updated": {"states": {"hover": {"border": {"width": "1px", "style": "solid"}}}},
            "changes": {"states": {"hover": {"border": {"width": "4px"}}}}
        }));

        let reconciler = EditReconciler::unified();
        let (original, updated) = reconciler.compute_state_delta(&edit, "hover", None);
        assert_eq!(original["border"], json!({"width": "1px", "style": "solid"}));
        assert_eq!(updated["border"], json!({"width": "4px", "style": "solid"}));
    }

    #[test]
    fn test_appearance_merges_and_gates_on_change() {
        let edit = record(json!({
            "type": "element",
            "elementId": "x",
            "original": {"states": {"default": {"appearance": {"opacity": 0.5, "blendMode": "normal"}}}},
            "updated": {"states": {"default": {"appearance": {"opacity": 0.8}}}}
        }));

        let reconciler = EditReconciler::unified();
        let (original, updated) = reconciler.compute_state_delta(&edit, DEFAULT_STATE, None);
        // merged wholesale, untouched keys ride along
        assert_eq!(
            updated["appearance"],
            json!({"opacity": 0.8, "blendMode": "normal"})
        );
        assert_eq!(
            original["appearance"],
            json!({"opacity": 0.5, "blendMode": "normal"})
        );
    }

    #[test]
    fn test_unchanged_appearance_drops() {
        let edit = record(json!({
            "type": "element",
            "elementId": "x",
            "original": {"states": {"default": {"appearance": {"opacity": 0.5}, "border": {"width": "2px"}}}},
            "updated": {"states": {"default": {"appearance": {"opacity": 0.5}, "border": {"width": "3px"}}}}
        }));

        let reconciler = EditReconciler::unified();
        let (_, updated) = reconciler.compute_state_delta(&edit, DEFAULT_STATE, None);
        assert!(updated.get("appearance").is_none());
        assert!(updated.get("border").is_some());
    }

    #[test]
    fn test_top_level_shape_is_flat_default_plus_nested_states() {
        let edit = record(json!({
            "type": "element",
            "elementId": "x",
            "original": {"states": {
                "default": {"border": {"width": "1px"}},
                "hover": {"border": {"width": "1px"}}
            }},
            "updated": {"states": {
                "default": {"border": {"width": "2px"}},
                "hover": {"border": {"width": "3px"}}
            }}
        }));

        let reconciler = EditReconciler::unified();
        let pair = reconciler.build_top_level_delta(&edit, None);
        assert_eq!(pair.updated["border"]["width"], "2px");
        assert_eq!(pair.updated["states"]["hover"]["border"]["width"], "3px");
        assert_eq!(pair.original["border"]["width"], "1px");
    }

    #[test]
    fn test_zero_diff_record_collapses_to_baseline_fill() {
        let edit = record(json!({
            "type": "element",
            "elementId": "x",
            "original": {"states": {"default": {"border": {"width": "1px"}}}},
            "updated": {"states": {"default": {"border": {"width": "1px"}}}}
        }));
        let baseline = Baseline::parse(
            r##"{"states": {"default": {"fill": [{"mode": "solid", "color": "#EF9108"}], "layout": {"display": "flex"}}}}"##,
        )
        .unwrap();

        let reconciler = EditReconciler::unified();
        let log = EditLog {
            edits: vec![edit],
        };
        match reconciler.reconcile_parsed(&log, "x", Some(&baseline)) {
            Reconciliation::BaselineEcho { category, pair } => {
                assert_eq!(category, Category::Fill);
                assert!(!pair.is_zero());
                assert_eq!(pair.original, pair.updated);
            }
            other => panic!("expected baseline echo, got {:?}", other),
        }
    }

    #[test]
    fn test_fallback_heuristic_categories() {
        assert_eq!(fallback_category("demo-layout-block"), Some(Category::Layout));
        assert_eq!(fallback_category("demo-grid-area"), Some(Category::Layout));
        assert_eq!(fallback_category("demo-color-block"), Some(Category::Fill));
        assert_eq!(fallback_category("hero-gradient"), Some(Category::Fill));
        assert_eq!(fallback_category("card-border"), Some(Category::Border));
        assert_eq!(fallback_category("page-heading"), Some(Category::Typography));
        assert_eq!(fallback_category("mystery-node"), None);
    }

    #[test]
    fn test_legacy_border_uses_loose_equality() {
        let edit = record(json!({
            "type": "border",
            "elementId": "card-border",
            "original": {"width": 2, "style": "solid", "color": "#111"},
            "updated": {"width": "2", "style": "solid", "color": "#EF9108"}
        }));

        let reconciler = EditReconciler::unified();
        let log = EditLog { edits: vec![edit] };
        match reconciler.reconcile_parsed(&log, "card-border", None) {
            Reconciliation::Diff { pair, .. } => {
                // "2" == 2 loosely, so width drops; only color survives
                assert_eq!(pair.updated, json!([{"border": {"color": "#EF9108"}}]));
                assert_eq!(
                    pair.original,
                    json!([{"border": {"width": 2, "style": "solid", "color": "#111"}}])
                );
            }
            other => panic!("expected diff, got {:?}", other),
        }
    }

    #[test]
    fn test_inputs_records_echo_verbatim() {
        let edit = record(json!({
            "type": "inputs",
            "elementId": "demo-heading",
            "original": {"text": "Hello", "fontSize": "24px"},
            "updated": {"text": "Hello!", "fontSize": "28px"}
        }));

        let reconciler = EditReconciler::unified();
        let log = EditLog { edits: vec![edit] };
        match reconciler.reconcile_parsed(&log, "demo-heading", None) {
            Reconciliation::Diff { pair, .. } => {
                assert_eq!(pair.original, json!({"text": "Hello", "fontSize": "24px"}));
                assert_eq!(pair.updated, json!({"text": "Hello!", "fontSize": "28px"}));
            }
            other => panic!("expected diff, got {:?}", other),
        }
    }

    #[test]
    fn test_formatted_view_applies_layout_allow_list() {
        let edit = record(json!({
            "type": "element",
            "elementId": "demo-layout-block",
            "original": {"states": {"default": {"layout": {"display": "block"}}}},
            "updated": {"states": {"default": {"layout": {
                "display": "flex",
                "transform": "rotate(10deg)"
            }}}}
        }));

        let reconciler = EditReconciler::unified();
        let formatted = reconciler.formatted_view(&edit, None);
        let layout = &formatted.updated["states"]["default"]["layout"];
        assert_eq!(layout["display"], "flex");
        assert!(layout.get("transform").is_none());

        // the simple diff is unrestricted
        let pair = reconciler.build_top_level_delta(&edit, None);
        assert_eq!(pair.updated["layout"]["transform"], "rotate(10deg)");
    }

    #[test]
    fn test_first_match_wins() {
        let log = EditLog {
            edits: vec![
                record(json!({
                    "type": "border",
                    "elementId": "card",
                    "original": {"width": "1px"},
                    "updated": {"width": "2px"}
                })),
                record(json!({
                    "type": "border",
                    "elementId": "card",
                    "original": {"width": "1px"},
                    "updated": {"width": "9px"}
                })),
            ],
        };

        let reconciler = EditReconciler::unified();
        match reconciler.reconcile_parsed(&log, "card", None) {
            Reconciliation::Diff { pair, .. } => {
                assert_eq!(pair.updated[0]["border"]["width"], "2px");
            }
            other => panic!("expected diff, got {:?}", other),
        }
    }
}
