//! The configuration event data model.
//!
//! Events are one-shot immutable value objects: created synchronously by the
//! component that observed (or is about to perform) the described action,
//! handed to whoever dispatches them, and dropped once observed. Construction
//! stores every argument verbatim, performs no validation, and cannot fail.

mod configuration;
mod envelope;

pub use configuration::ConfigurationEvent;
pub use envelope::{ChangeKind, Envelope, EventCategory};
