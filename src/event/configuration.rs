//! Events describing mutations of a configuration object.

use super::{ChangeKind, Envelope, EventCategory};

/// Describes a single mutation of a configuration object.
///
/// These are "raw" events: unfiltered modifications of any kind, identified
/// by a numeric [`ChangeKind`] whose meaning belongs to the raising
/// component. A single logical mutation typically produces two events that
/// agree on every field except [`is_before_update`](Self::is_before_update):
/// one raised before the change applies and one after, so observers can
/// react at the correct point in time. The raising component is responsible
/// for that pairing and its ordering; this type only carries the flag.
///
/// `S` is the type of the mutated configuration object, borrowed for the
/// lifetime of the dispatch. `V` is the property value payload.
///
/// # Examples
///
/// ```rust
/// use config_events::event::{ChangeKind, ConfigurationEvent};
///
/// let cfg = "the configuration object";
/// let event = ConfigurationEvent::new(
///     &cfg,
///     ChangeKind::new(3),
///     Some("color".to_string()),
///     Some("red"),
///     true,
/// );
///
/// assert_eq!(event.kind().code(), 3);
/// assert_eq!(event.property_name(), Some("color"));
/// assert_eq!(event.property_value(), Some(&"red"));
/// assert!(event.is_before_update());
/// ```
pub struct ConfigurationEvent<'s, S: ?Sized, V> {
    envelope: Envelope<'s, S>,
    kind: ChangeKind,
    property_name: Option<String>,
    property_value: Option<V>,
    before_update: bool,
}

impl<'s, S: ?Sized, V> ConfigurationEvent<'s, S, V> {
    /// Create a new event.
    ///
    /// All arguments are stored verbatim; nothing is validated and
    /// construction cannot fail. `property_name` and `property_value` are
    /// `None` for mutations that are not property-scoped, and consumers must
    /// treat an absent value as "no data", not as an error.
    pub fn new(
        source: &'s S,
        kind: ChangeKind,
        property_name: Option<String>,
        property_value: Option<V>,
        before_update: bool,
    ) -> Self {
        Self {
            envelope: Envelope::new(source, EventCategory::Configuration),
            kind,
            property_name,
            property_value,
            before_update,
        }
    }

    /// The configuration object that was (or is about to be) mutated.
    pub fn source(&self) -> &'s S {
        self.envelope.source()
    }

    /// The routing category; always [`EventCategory::Configuration`].
    pub fn category(&self) -> EventCategory {
        self.envelope.category()
    }

    /// The kind of mutation that caused this event.
    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// The name of the affected property, if the mutation is
    /// property-scoped.
    pub fn property_name(&self) -> Option<&str> {
        self.property_name.as_deref()
    }

    /// The value associated with the mutation, if any.
    pub fn property_value(&self) -> Option<&V> {
        self.property_value.as_ref()
    }

    /// Whether this event was raised before the mutation was applied.
    pub fn is_before_update(&self) -> bool {
        self.before_update
    }
}

impl<'s, S: ?Sized, V: Clone> ConfigurationEvent<'s, S, V> {
    /// The after-update counterpart of a before-update event.
    ///
    /// Every field is carried over unchanged except the before-update flag,
    /// which becomes `false`. Raising components derive the second half of a
    /// pair from the first so both halves describe the same mutation.
    pub fn paired_after(&self) -> Self {
        Self {
            envelope: self.envelope,
            kind: self.kind,
            property_name: self.property_name.clone(),
            property_value: self.property_value.clone(),
            before_update: false,
        }
    }
}
