//! A property store that announces every mutation as an event pair.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::de::DeserializeOwned;

use super::loader;
use crate::error::Result;
use crate::event::{ChangeKind, ConfigurationEvent};

/// Sink receiving the events raised by an [`EventedConfig`].
pub type EventSink<V> =
    Box<dyn Fn(&ConfigurationEvent<'_, EventedConfig<V>, V>) + Send + Sync>;

/// A string-keyed property store with lock-free reads that raises a
/// before/after [`ConfigurationEvent`] pair around every mutation.
///
/// The store keeps its properties behind `arc-swap`: reads take a cheap
/// atomic snapshot, writers replace the whole map atomically, and readers
/// never see partial state. Each mutating operation raises one event with
/// the before-update flag set, applies the change, then raises the paired
/// after-update event with identical fields. With no sink installed, no
/// events are constructed at all.
///
/// The mutation codes this store attaches to its events are its own
/// contract, published as associated constants; the event type itself
/// accepts any code.
///
/// # Examples
///
/// ```rust
/// use config_events::core::EventedConfig;
///
/// let store: EventedConfig<String> = EventedConfig::new().with_sink(|event| {
///     println!(
///         "{} {:?} (before: {})",
///         event.kind().code(),
///         event.property_name(),
///         event.is_before_update(),
///     );
/// });
///
/// store.set_property("color", "red".to_string());
/// store.clear_property("color");
/// assert!(store.is_empty());
/// ```
pub struct EventedConfig<V> {
    properties: ArcSwap<BTreeMap<String, V>>,
    sink: Option<EventSink<V>>,
}

impl<V> EventedConfig<V> {
    /// A property was added.
    pub const ADD_PROPERTY: ChangeKind = ChangeKind::new(1);
    /// A property was removed.
    pub const CLEAR_PROPERTY: ChangeKind = ChangeKind::new(2);
    /// A property's value was set or replaced.
    pub const SET_PROPERTY: ChangeKind = ChangeKind::new(3);
    /// All properties were removed.
    pub const CLEAR: ChangeKind = ChangeKind::new(4);
    /// The whole store was replaced from a file.
    pub const RELOAD: ChangeKind = ChangeKind::new(5);

    /// Create an empty store that raises no events.
    pub fn new() -> Self {
        Self {
            properties: ArcSwap::from_pointee(BTreeMap::new()),
            sink: None,
        }
    }

    /// Install the sink that receives this store's events.
    ///
    /// At most one sink exists; routing events to multiple interested
    /// parties is the sink's own concern, including any ordering among
    /// them.
    pub fn with_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&ConfigurationEvent<'_, EventedConfig<V>, V>) + Send + Sync + 'static,
    {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Snapshot of all properties.
    ///
    /// Lock-free; the returned map is immutable and detached from later
    /// updates.
    pub fn snapshot(&self) -> Arc<BTreeMap<String, V>> {
        self.properties.load_full()
    }

    /// Whether a property with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.load().contains_key(name)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.load().len()
    }

    /// Whether the store holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.load().is_empty()
    }
}

impl<V: Clone> EventedConfig<V> {
    /// The value of a property, if present.
    pub fn get(&self, name: &str) -> Option<V> {
        self.properties.load().get(name).cloned()
    }

    /// Add a property. An existing property of the same name is replaced.
    ///
    /// Raises an [`ADD_PROPERTY`](Self::ADD_PROPERTY) pair carrying the
    /// property name and value.
    pub fn add_property(&self, name: &str, value: V) {
        self.mutate(Self::ADD_PROPERTY, Some(name), Some(&value), |map| {
            map.insert(name.to_owned(), value.clone());
        });
    }

    /// Set a property's value, replacing any previous value.
    ///
    /// Raises a [`SET_PROPERTY`](Self::SET_PROPERTY) pair carrying the
    /// property name and value.
    pub fn set_property(&self, name: &str, value: V) {
        self.mutate(Self::SET_PROPERTY, Some(name), Some(&value), |map| {
            map.insert(name.to_owned(), value.clone());
        });
    }

    /// Remove a property.
    ///
    /// Raises a [`CLEAR_PROPERTY`](Self::CLEAR_PROPERTY) pair whether or
    /// not the property existed; the pair describes the requested mutation,
    /// not its effect.
    pub fn clear_property(&self, name: &str) {
        self.mutate(Self::CLEAR_PROPERTY, Some(name), None, |map| {
            map.remove(name);
        });
    }

    /// Remove all properties.
    ///
    /// Raises a [`CLEAR`](Self::CLEAR) pair with no property name or value.
    pub fn clear(&self) {
        self.mutate(Self::CLEAR, None, None, BTreeMap::clear);
    }

    /// Replace the whole store with the contents of a configuration file.
    ///
    /// The file is parsed before any event is raised: a load failure leaves
    /// the store untouched and raises nothing. On success a single
    /// [`RELOAD`](Self::RELOAD) pair brackets the swap; the pair carries no
    /// property name or value.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or deserialized
    /// into `V` values.
    pub fn reload_from_file(&self, path: impl AsRef<Path>) -> Result<()>
    where
        V: DeserializeOwned,
    {
        let path = path.as_ref();
        let loaded = loader::load_properties::<V>(path)?;
        tracing::debug!(
            path = %path.display(),
            properties = loaded.len(),
            "reloading store from file"
        );
        self.mutate(Self::RELOAD, None, None, |map| {
            *map = loaded;
        });
        Ok(())
    }

    /// Raise the before event, apply the mutation, raise the paired after
    /// event.
    fn mutate(
        &self,
        kind: ChangeKind,
        name: Option<&str>,
        value: Option<&V>,
        apply: impl FnOnce(&mut BTreeMap<String, V>),
    ) {
        match self.sink.as_ref() {
            Some(sink) => {
                tracing::trace!(kind = kind.code(), property = ?name, "raising event pair");
                let before = ConfigurationEvent::new(
                    self,
                    kind,
                    name.map(str::to_owned),
                    value.cloned(),
                    true,
                );
                sink(&before);
                self.apply(apply);
                sink(&before.paired_after());
            }
            None => self.apply(apply),
        }
    }

    fn apply(&self, apply: impl FnOnce(&mut BTreeMap<String, V>)) {
        let mut next = (*self.properties.load_full()).clone();
        apply(&mut next);
        self.properties.store(Arc::new(next));
    }
}

impl<V> Default for EventedConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}
