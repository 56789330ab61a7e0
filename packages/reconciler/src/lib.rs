//! # Situ Reconciler
//!
//! Edit-diffing and state-reconciliation engine for Situ.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: edit log + baseline wire types       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ reconciler: log + baseline → delta pair     │
//! │  - Resolve the active record per element    │
//! │  - Per-state, per-category delta filtering  │
//! │  - Legacy fill/border/inputs branches       │
//! │  - Baseline fallback + zero-diff collapse   │
//! │  - Local-recover sentinel policy            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render: highlight + line diff → HTML        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Pure computation**: every call recomputes from scratch, no retained
//!    state, no I/O, safe to re-invoke from any context
//! 2. **First match wins**: one active record per element and category,
//!    taken in log order
//! 3. **Baseline is ground truth for `default`**: the DOM-captured snapshot
//!    outranks a record's own `original` for the default state
//! 4. **Display never breaks**: failures degrade to sentinel strings at the
//!    boundary, typed errors stay internal
//!
//! ## Usage
//!
//! ```rust,ignore
//! use situ_reconciler::{CategoryFocus, EditReconciler, Reconciliation};
//!
//! let reconciler = EditReconciler::unified();
//! match reconciler.reconcile(Some(log_json), "demo-color-block-primary", baseline_json) {
//!     Reconciliation::Diff { pair, .. } => show(pair.original, pair.updated),
//!     Reconciliation::BaselineEcho { pair, .. } => show_unchanged(pair),
//!     Reconciliation::Notice(notice) => show_message(notice.message()),
//! }
//! ```

mod delta;
mod errors;
mod fills;
mod focus;
mod reconcile;
mod style_state;

pub use delta::{DeltaEngine, JsonDelta};
pub use errors::{Notice, ReconcileError, ReconcileResult};
pub use fills::{FillNormalizer, GradientFills};
pub use focus::CategoryFocus;
pub use reconcile::{DiffPair, EditReconciler, Reconciliation};
pub use style_state::{border_changed, style_state, StyleState};

// Re-export the model types callers hold alongside the reconciler
pub use situ_model::{Baseline, Category, EditLog, EditRecord, DEFAULT_STATE};
