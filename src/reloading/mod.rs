//! Reload detection: detectors, the reloading controller, and the event it
//! raises.
//!
//! A [`ReloadingController`] owns a [`ReloadingDetector`] and turns its
//! answers into at most one [`ReloadingEvent`] per detected requirement.
//! What "reloading" actually means — rereading a file, refetching a remote
//! document — is the consumer's business; the controller only announces the
//! need.

mod controller;
mod detector;
mod event;

#[cfg(feature = "watch")]
mod trigger;
#[cfg(feature = "watch")]
mod watch;

pub use controller::ReloadingController;
pub use detector::{FileChangeDetector, ReloadingDetector};
pub use event::ReloadingEvent;

#[cfg(feature = "watch")]
pub use trigger::PeriodicReloadingTrigger;
#[cfg(feature = "watch")]
pub use watch::WatchDetector;
