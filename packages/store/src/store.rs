//! File-backed edit log with publish/subscribe change notification.

use crate::errors::{StoreError, StoreResult};
use situ_model::EditLog;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;
use tracing::debug;

/// Notification delivered to subscribers whenever the log content may have
/// changed, from a local save or an external write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Updated { timestamp_ms: i64 },
}

pub struct EditLogStore {
    path: PathBuf,
    subscribers: Mutex<Vec<Sender<StoreEvent>>>,
}

impl EditLogStore {
    /// Binds to a log file path. No I/O happens until `load`/`save`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw stored JSON, `None` when the file does not exist yet.
    pub fn load_raw(&self) -> StoreResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Parsed log; a missing file is an empty log.
    pub fn load(&self) -> StoreResult<EditLog> {
        match self.load_raw()? {
            Some(raw) => Ok(EditLog::parse(&raw)?),
            None => Ok(EditLog::default()),
        }
    }

    /// Writes the log and notifies every live subscriber.
    pub fn save(&self, log: &EditLog) -> StoreResult<()> {
        let serialized = serde_json::to_string_pretty(log).map_err(StoreError::Serialize)?;
        fs::write(&self.path, serialized)?;
        debug!(path = %self.path.display(), records = log.len(), "edit log saved");
        self.publish();
        Ok(())
    }

    /// Registers a change listener. Dropped receivers are cleaned up on the
    /// next publish.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }

    pub(crate) fn publish(&self) {
        let event = StoreEvent::Updated {
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        };
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|subscriber| subscriber.send(event).is_ok());
    }
}
