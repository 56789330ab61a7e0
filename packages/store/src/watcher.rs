//! File watcher bridging external writes into the store's publish path.
//!
//! Watches the log file's directory (the file itself may not exist yet)
//! and forwards events touching the target file. The notify handle lives
//! in the returned guard; dropping it disconnects the channel and ends the
//! forwarding thread.

use crate::errors::StoreResult;
use crate::store::EditLogStore;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

pub struct LogWatcher {
    _watcher: RecommendedWatcher,
}

impl LogWatcher {
    pub fn spawn(store: Arc<EditLogStore>) -> StoreResult<Self> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        let target = store.path().to_path_buf();
        let watch_root = target
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        watcher.watch(&watch_root, RecursiveMode::NonRecursive)?;

        thread::spawn(move || {
            while let Ok(result) = rx.recv() {
                match result {
                    Ok(event) if touches(&event, &target) => {
                        debug!(path = %target.display(), "external log change observed");
                        store.publish();
                    }
                    Ok(_) => {}
                    Err(err) => warn!(error = %err, "file watcher reported an error"),
                }
            }
        });

        Ok(Self { _watcher: watcher })
    }
}

/// Editors often replace files via renamed temporaries, so match on the
/// final file name rather than the exact event path.
fn touches(event: &Event, target: &Path) -> bool {
    let Some(name) = target.file_name() else {
        return true;
    };
    event
        .paths
        .iter()
        .any(|path| path.file_name() == Some(name))
}
