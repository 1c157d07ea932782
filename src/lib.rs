//! # config-events
//!
//! Immutable notification events for configuration management, plus the
//! machinery that raises them.
//!
//! ## Overview
//!
//! `config-events` provides the event model used around a hot-reloadable
//! configuration store:
//!
//! - [`ConfigurationEvent`](crate::event::ConfigurationEvent): describes a
//!   single mutation of a configuration object, raised once before and once
//!   after the change applies
//! - [`ReloadingEvent`](crate::reloading::ReloadingEvent): signals that
//!   reloading of configuration data is required
//!
//! and the components that raise them:
//!
//! - [`EventedConfig`](crate::core::EventedConfig): a property store with
//!   lock-free reads that brackets every mutation in a before/after event pair
//! - [`ReloadingController`](crate::reloading::ReloadingController): turns the
//!   answers of a pluggable [`ReloadingDetector`](crate::reloading::ReloadingDetector)
//!   into exactly one reload event per detected requirement
//!
//! Events are plain immutable values: every field is fixed at construction,
//! read back verbatim, and never validated. Dispatching them to interested
//! parties is left to the caller; the raising components hand each event to at
//! most one sink.
//!
//! ## Quick Start
//!
//! ```rust
//! use config_events::prelude::*;
//!
//! let store: EventedConfig<String> = EventedConfig::new().with_sink(|event| {
//!     if !event.is_before_update() {
//!         println!(
//!             "change {} applied to {:?}",
//!             event.kind().code(),
//!             event.property_name(),
//!         );
//!     }
//! });
//!
//! store.set_property("color", "red".to_string());
//! assert_eq!(store.get("color").as_deref(), Some("red"));
//! ```
//!
//! ## Reload Detection
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use config_events::prelude::*;
//!
//! # fn example() -> config_events::error::Result<()> {
//! let detector = FileChangeDetector::new("config.yaml")?
//!     .with_refresh_delay(Duration::from_secs(1));
//! let controller = ReloadingController::new(Box::new(detector));
//!
//! if let Some(event) = controller.check_for_reloading::<()>(None) {
//!     // Reload configuration data, then re-arm the controller.
//!     event.controller().reset_reloading_state();
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `watch` (default): the notification-driven
//!   [`WatchDetector`](crate::reloading::WatchDetector) and the tokio-based
//!   [`PeriodicReloadingTrigger`](crate::reloading::PeriodicReloadingTrigger)

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod event;
pub mod reloading;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{EventSink, EventedConfig};
    pub use crate::error::{ConfigError, Result};
    pub use crate::event::{ChangeKind, ConfigurationEvent, EventCategory};
    pub use crate::reloading::{
        FileChangeDetector, ReloadingController, ReloadingDetector, ReloadingEvent,
    };

    #[cfg(feature = "watch")]
    pub use crate::reloading::{PeriodicReloadingTrigger, WatchDetector};
}
