//! Proposer config file watcher for hot reload.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

/// A watcher that signals when the proposer config file changes.
///
/// It only signals; reading and validating the file is left to the next sync,
/// so a broken edit is rejected like any other failed fetch.
///
/// The parent directory is watched rather than the file, so replacing the file
/// by rename (editors, atomic writes, symlink swaps) keeps being observed.
pub struct ConfigWatcher {
    path: PathBuf,
    change_tx: mpsc::UnboundedSender<()>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver of change notifications.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<()>) {
        let (change_tx, change_rx) = mpsc::unbounded_channel();
        (Self::with_sender(path, change_tx), change_rx)
    }

    /// Create a watcher that reports changes on an existing channel.
    pub fn with_sender(path: &Path, change_tx: mpsc::UnboundedSender<()>) -> Self {
        Self {
            path: path.to_path_buf(),
            change_tx,
        }
    }

    /// Start watching. The returned watcher must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Some(file_name) = self.path.file_name().map(OsStr::to_os_string) else {
            return Err(notify::Error::path_not_found().add_path(self.path));
        };
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.join(&file_name).exists() {
            return Err(notify::Error::path_not_found().add_path(self.path));
        }

        let tx = self.change_tx.clone();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let relevant = event.kind.is_modify() || event.kind.is_create();
                    if relevant && event.paths.iter().any(|p| p.file_name() == Some(file_name.as_os_str())) {
                        tracing::info!("Proposer config change detected");
                        let _ = tx.send(());
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Proposer config watcher started");
        Ok(watcher)
    }
}
