//! The event raised when a reload operation is required.

use super::ReloadingController;
use crate::event::{Envelope, EventCategory};

/// Signals that reloading of configuration data is required.
///
/// Raised by [`ReloadingController::check_for_reloading`] when its detector
/// reports a change; exactly one event exists per detected requirement. The
/// optional payload is whatever was passed into the reload check and is
/// meaningful only to the consumer that requested it.
pub struct ReloadingEvent<'c, D> {
    envelope: Envelope<'c, ReloadingController>,
    data: Option<D>,
}

impl<'c, D> ReloadingEvent<'c, D> {
    /// Create a new event for the given controller.
    ///
    /// `data` is stored unchanged; construction cannot fail.
    pub fn new(controller: &'c ReloadingController, data: Option<D>) -> Self {
        Self {
            envelope: Envelope::new(controller, EventCategory::Reloading),
            data,
        }
    }

    /// The controller that raised this event.
    ///
    /// Listeners typically call
    /// [`reset_reloading_state`](ReloadingController::reset_reloading_state)
    /// on it once the reload has been performed.
    pub fn controller(&self) -> &'c ReloadingController {
        self.envelope.source()
    }

    /// The routing category; always [`EventCategory::Reloading`].
    pub fn category(&self) -> EventCategory {
        self.envelope.category()
    }

    /// Additional data about the reload operation, if any was supplied with
    /// the check that produced this event. `None` means "no additional
    /// data".
    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }
}
