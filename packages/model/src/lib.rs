//! # Situ Model
//!
//! Shared data model for the Situ edit-reconciliation engine.
//!
//! Holds the wire types persisted by the editor UI (the edit log and its
//! records), the baseline snapshot captured before any edits existed, the
//! category/state vocabulary, and the JSON value helpers every other crate
//! compares with.
//!
//! Records are deliberately loose: payload shapes vary by record `type`
//! (unified state maps, legacy flat fill arrays, flat border objects), so
//! payloads stay `serde_json::Value` behind typed accessors instead of
//! forcing a schema the legacy formats would not fit.

mod baseline;
mod edit;
mod errors;
mod log;
mod states;
mod value;

pub use baseline::{Baseline, BASELINE_ATTR};
pub use edit::{ChangeSet, EditKind, EditRecord, Locator, StateChange};
pub use errors::{ModelError, ModelResult};
pub use log::{EditLog, EDIT_LOG_KEY};
pub use states::{
    layout_key_allowed, snapshot_category, state_snapshot, states_of, Category, DEFAULT_STATE,
    LAYOUT_ALLOWED,
};
pub use value::{json_eq, loose_eq, non_empty, stringify};
