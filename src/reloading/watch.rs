//! Notification-driven reload detection.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use notify::{RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};

use super::ReloadingDetector;
use crate::error::{ConfigError, Result};

/// Event-driven [`ReloadingDetector`] backed by the `notify` crate.
///
/// Modification and creation events on the watched path set a dirty flag
/// that the next poll observes; a performed reload clears it. Compared to
/// [`FileChangeDetector`](super::FileChangeDetector) this avoids stat'ing
/// the file on every check, but it needs the platform watcher to stay
/// alive, so the detector owns it.
pub struct WatchDetector {
    dirty: Arc<AtomicBool>,
    path: PathBuf,
    // Dropping the watcher stops the platform-level watch.
    _watcher: RecommendedWatcher,
}

impl WatchDetector {
    /// Start watching the given file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved or the platform
    /// watcher cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path
            .as_ref()
            .canonicalize()
            .map_err(|e| ConfigError::LoadError(format!("Failed to resolve path: {}", e)))?;

        let dirty = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&dirty);

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            if let Ok(event) = res {
                // Only care about write/modify events
                if matches!(
                    event.kind,
                    notify::EventKind::Modify(_) | notify::EventKind::Create(_)
                ) {
                    flag.store(true, Ordering::Release);
                }
            }
        })
        .map_err(|e| ConfigError::WatchError(format!("Failed to create file watcher: {}", e)))?;

        watcher
            .watch(&path, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::WatchError(format!("Failed to watch path: {}", e)))?;

        Ok(Self {
            dirty,
            path,
            _watcher: watcher,
        })
    }

    /// The watched path, canonicalized.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReloadingDetector for WatchDetector {
    fn is_reloading_required(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    fn reloading_performed(&self) {
        self.dirty.store(false, Ordering::Release);
    }
}
