//! Detecting when configuration data needs to be reloaded.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant, SystemTime};

use crate::error::{ConfigError, Result};

/// Strategy for deciding whether configuration data changed behind its
/// consumer's back.
///
/// Implementations answer polls from a
/// [`ReloadingController`](crate::reloading::ReloadingController) and are
/// told when a reload was performed so they can re-arm against the new
/// state. Detector failures are not propagated: a detector that cannot
/// answer reports no change required.
pub trait ReloadingDetector: Send + Sync {
    /// Whether the monitored resource changed since the last reload.
    fn is_reloading_required(&self) -> bool;

    /// Notification that the owning component completed a reload.
    fn reloading_performed(&self);
}

struct FileState {
    last_modified: Option<SystemTime>,
    last_checked: Option<Instant>,
    required: bool,
}

/// Detects changes to a configuration file via its modification time.
///
/// The modification time at construction becomes the baseline; any later
/// difference counts as a reload requirement. Filesystem checks are
/// rate-limited by a refresh delay (default 5 seconds): within the delay
/// window the detector answers from its cached verdict instead of touching
/// the filesystem. A file that cannot be stat'ed counts as unchanged.
///
/// # Examples
///
/// ```rust,no_run
/// use std::time::Duration;
/// use config_events::reloading::FileChangeDetector;
///
/// # fn example() -> config_events::error::Result<()> {
/// let detector = FileChangeDetector::new("config.yaml")?
///     .with_refresh_delay(Duration::from_secs(1));
/// # Ok(())
/// # }
/// ```
pub struct FileChangeDetector {
    path: PathBuf,
    refresh_delay: Duration,
    state: Mutex<FileState>,
}

impl FileChangeDetector {
    /// Default minimum interval between filesystem checks.
    pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_secs(5);

    /// Create a detector for the given file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path
            .as_ref()
            .canonicalize()
            .map_err(|e| ConfigError::LoadError(format!("Failed to resolve path: {}", e)))?;

        let last_modified = modification_time(&path);
        Ok(Self {
            path,
            refresh_delay: Self::DEFAULT_REFRESH_DELAY,
            state: Mutex::new(FileState {
                last_modified,
                last_checked: None,
                required: false,
            }),
        })
    }

    /// Set the minimum interval between filesystem checks.
    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    /// The watched path, canonicalized.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn state(&self) -> std::sync::MutexGuard<'_, FileState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReloadingDetector for FileChangeDetector {
    fn is_reloading_required(&self) -> bool {
        let mut state = self.state();

        if let Some(checked) = state.last_checked {
            if checked.elapsed() < self.refresh_delay {
                return state.required;
            }
        }
        state.last_checked = Some(Instant::now());

        state.required = match modification_time(&self.path) {
            Some(current) => state.last_modified != Some(current),
            // A missing file is not a change; wait for it to reappear.
            None => false,
        };
        if state.required {
            tracing::debug!(path = %self.path.display(), "file modification detected");
        }
        state.required
    }

    fn reloading_performed(&self) {
        let mut state = self.state();
        state.last_modified = modification_time(&self.path);
        state.last_checked = None;
        state.required = false;
    }
}

fn modification_time(path: &Path) -> Option<SystemTime> {
    match std::fs::metadata(path).and_then(|m| m.modified()) {
        Ok(time) => Some(time),
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                error = %e,
                "could not read modification time"
            );
            None
        }
    }
}
