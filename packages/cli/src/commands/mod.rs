pub mod inspect;
pub mod mcp;
pub mod state;
pub mod watch;

pub use inspect::{inspect, InspectArgs};
pub use mcp::{mcp, McpArgs};
pub use state::{state, StateArgs};
pub use watch::{watch, WatchArgs};

use std::io;
use std::path::Path;

/// Reads a file that is allowed to be absent; the reconciler turns a
/// missing side into its sentinel display.
pub(crate) fn read_optional(path: &Path) -> anyhow::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}
