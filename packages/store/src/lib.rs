//! # Situ Store
//!
//! Persistence and change notification for the edit log, plus baseline
//! lookup. The store publishes to subscribers on every save; a `notify`
//! file watcher feeds the same publish path for external writers, so
//! callers subscribe once instead of polling.

mod baselines;
mod errors;
mod store;
mod watcher;

pub use baselines::{BaselineSource, StaticBaselines};
pub use errors::{StoreError, StoreResult};
pub use store::{EditLogStore, StoreEvent};
pub use watcher::LogWatcher;
