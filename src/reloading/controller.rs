//! The controller that turns detector answers into reload events.

use std::sync::atomic::{AtomicBool, Ordering};

use super::{ReloadingDetector, ReloadingEvent};

/// Detects the need for reload operations and raises the matching events.
///
/// The controller polls its [`ReloadingDetector`] on demand. When the
/// detector reports a change, the controller enters the *reloading state*
/// and returns the single [`ReloadingEvent`] describing that requirement;
/// further checks return nothing until
/// [`reset_reloading_state`](Self::reset_reloading_state) is called, at
/// which point the detector is re-armed and a new requirement can be
/// detected.
///
/// Dispatching the returned event to interested parties is the caller's
/// concern; the controller only creates it.
///
/// # Examples
///
/// ```rust
/// use config_events::reloading::{ReloadingController, ReloadingDetector};
///
/// struct Always;
///
/// impl ReloadingDetector for Always {
///     fn is_reloading_required(&self) -> bool {
///         true
///     }
///
///     fn reloading_performed(&self) {}
/// }
///
/// let controller = ReloadingController::new(Box::new(Always));
///
/// let event = controller
///     .check_for_reloading(Some("requested by example"))
///     .expect("detector reports a change");
/// assert!(controller.is_in_reloading_state());
///
/// // The same requirement is never announced twice.
/// assert!(controller.check_for_reloading::<()>(None).is_none());
///
/// event.controller().reset_reloading_state();
/// assert!(!controller.is_in_reloading_state());
/// ```
pub struct ReloadingController {
    detector: Box<dyn ReloadingDetector>,
    reloading: AtomicBool,
}

impl ReloadingController {
    /// Create a controller around the given detector.
    pub fn new(detector: Box<dyn ReloadingDetector>) -> Self {
        Self {
            detector,
            reloading: AtomicBool::new(false),
        }
    }

    /// Check whether a reload is required.
    ///
    /// Returns the event describing the requirement on a positive check.
    /// While the controller is already in reloading state the outstanding
    /// requirement has already been announced and `None` is returned; use
    /// [`is_in_reloading_state`](Self::is_in_reloading_state) to tell that
    /// apart from "no change".
    ///
    /// `data` is attached to the event verbatim and is meaningful only to
    /// the consumer that requested this check.
    pub fn check_for_reloading<D>(&self, data: Option<D>) -> Option<ReloadingEvent<'_, D>> {
        if self.reloading.load(Ordering::Acquire) {
            return None;
        }
        if !self.detector.is_reloading_required() {
            return None;
        }
        if self
            .reloading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            // Another checker won the race and already raised the event.
            return None;
        }

        tracing::debug!("reload requirement detected");
        Some(ReloadingEvent::new(self, data))
    }

    /// Whether a detected reload requirement is still outstanding.
    pub fn is_in_reloading_state(&self) -> bool {
        self.reloading.load(Ordering::Acquire)
    }

    /// Leave the reloading state after a reload was performed.
    ///
    /// Re-arms the detector via
    /// [`ReloadingDetector::reloading_performed`]. Calling this while not in
    /// reloading state has no effect.
    pub fn reset_reloading_state(&self) {
        if self
            .reloading
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.detector.reloading_performed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    struct Scripted {
        required: AtomicBool,
        performed: AtomicUsize,
    }

    impl Scripted {
        fn new(required: bool) -> Self {
            Self {
                required: AtomicBool::new(required),
                performed: AtomicUsize::new(0),
            }
        }
    }

    impl ReloadingDetector for Scripted {
        fn is_reloading_required(&self) -> bool {
            self.required.load(Ordering::SeqCst)
        }

        fn reloading_performed(&self) {
            self.performed.fetch_add(1, Ordering::SeqCst);
            self.required.store(false, Ordering::SeqCst);
        }
    }

    #[test]
    fn no_change_means_no_event() {
        let controller = ReloadingController::new(Box::new(Scripted::new(false)));

        assert!(controller.check_for_reloading::<()>(None).is_none());
        assert!(!controller.is_in_reloading_state());
    }

    #[test]
    fn one_requirement_produces_exactly_one_event() {
        let controller = ReloadingController::new(Box::new(Scripted::new(true)));

        assert!(controller.check_for_reloading::<()>(None).is_some());
        assert!(controller.is_in_reloading_state());
        assert!(controller.check_for_reloading::<()>(None).is_none());
        assert!(controller.check_for_reloading::<()>(None).is_none());
    }

    #[test]
    fn reset_rearms_the_detector() {
        let detector = std::sync::Arc::new(Scripted::new(true));
        let controller = ReloadingController::new(Box::new(SharedDetector(detector.clone())));

        assert!(controller.check_for_reloading::<()>(None).is_some());
        controller.reset_reloading_state();

        assert_eq!(detector.performed.load(Ordering::SeqCst), 1);
        assert!(!controller.is_in_reloading_state());
        // Re-armed: the detector no longer reports the old change.
        assert!(controller.check_for_reloading::<()>(None).is_none());
    }

    #[test]
    fn reset_without_requirement_leaves_the_detector_alone() {
        let detector = std::sync::Arc::new(Scripted::new(false));
        let controller = ReloadingController::new(Box::new(SharedDetector(detector.clone())));

        controller.reset_reloading_state();
        assert_eq!(detector.performed.load(Ordering::SeqCst), 0);
    }

    struct SharedDetector(std::sync::Arc<Scripted>);

    impl ReloadingDetector for SharedDetector {
        fn is_reloading_required(&self) -> bool {
            self.0.is_reloading_required()
        }

        fn reloading_performed(&self) {
            self.0.reloading_performed();
        }
    }

    #[test]
    fn payload_is_attached_verbatim() {
        let controller = ReloadingController::new(Box::new(Scripted::new(true)));

        let event = controller
            .check_for_reloading(Some("payload".to_string()))
            .expect("change pending");
        assert_eq!(event.data().map(String::as_str), Some("payload"));
    }
}
