//! The evented configuration store.

mod evented;
mod loader;

pub use evented::{EventSink, EventedConfig};
