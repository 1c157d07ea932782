//! The generic envelope shared by every event kind.

/// Routing tag distinguishing the flat event categories.
///
/// A dispatch mechanism uses this tag to route an event to the listeners
/// interested in its category. The categories carry no further structure;
/// within a category, events are told apart by their own fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    /// A raw mutation of a configuration object.
    Configuration,
    /// A detected need to reload configuration data.
    Reloading,
}

/// Discriminator identifying the kind of mutation behind a
/// [`ConfigurationEvent`](crate::event::ConfigurationEvent).
///
/// The set of valid codes is defined by whichever component raises the
/// event, not by this type; see [`EventedConfig`](crate::core::EventedConfig)
/// for the codes used by this crate's own store. The code is never range
/// checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChangeKind(u32);

impl ChangeKind {
    /// Wrap a raw discriminator code.
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// The raw discriminator code.
    pub const fn code(self) -> u32 {
        self.0
    }
}

/// Envelope common to all event kinds: the component that raised the event
/// and the category tag used for routing.
///
/// Concrete event types compose an envelope instead of inheriting from a
/// shared base. The source is borrowed, not owned; an event never outlives
/// the component it describes.
pub struct Envelope<'s, S: ?Sized> {
    source: &'s S,
    category: EventCategory,
}

impl<'s, S: ?Sized> Envelope<'s, S> {
    /// Create an envelope for the given source.
    pub fn new(source: &'s S, category: EventCategory) -> Self {
        Self { source, category }
    }

    /// The component that raised the event.
    pub fn source(&self) -> &'s S {
        self.source
    }

    /// The routing category of the event.
    pub fn category(&self) -> EventCategory {
        self.category
    }
}

impl<'s, S: ?Sized> Clone for Envelope<'s, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'s, S: ?Sized> Copy for Envelope<'s, S> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_kind_round_trips_its_code() {
        assert_eq!(ChangeKind::new(0).code(), 0);
        assert_eq!(ChangeKind::new(42).code(), 42);
        assert_eq!(ChangeKind::new(u32::MAX).code(), u32::MAX);
    }

    #[test]
    fn envelope_returns_the_same_source() {
        let source = String::from("the source");
        let envelope = Envelope::new(&source, EventCategory::Configuration);

        assert!(std::ptr::eq(envelope.source(), &source));
        assert_eq!(envelope.category(), EventCategory::Configuration);
    }
}
