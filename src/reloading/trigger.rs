//! Periodic reload checking on a tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::{ReloadingController, ReloadingEvent};

/// Periodically runs reload checks against a shared controller.
///
/// Every period the trigger calls
/// [`check_for_reloading`](ReloadingController::check_for_reloading) and
/// hands a produced event to the supplied sink. The sink is a single
/// closure, not a listener registry; fan-out, if any, happens behind it.
/// Because the controller stays in reloading state until reset, a
/// requirement is delivered to the sink exactly once no matter how many
/// ticks pass before the reload happens.
///
/// The spawned task is aborted by [`stop`](Self::stop) or by dropping the
/// trigger.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use config_events::reloading::{
///     FileChangeDetector, PeriodicReloadingTrigger, ReloadingController,
/// };
///
/// # async fn example() -> config_events::error::Result<()> {
/// let detector = FileChangeDetector::new("config.yaml")?;
/// let controller = Arc::new(ReloadingController::new(Box::new(detector)));
///
/// let trigger = PeriodicReloadingTrigger::start(
///     Arc::clone(&controller),
///     Duration::from_secs(1),
///     |event| {
///         // Reload, then re-arm.
///         event.controller().reset_reloading_state();
///     },
/// );
///
/// // ... later
/// trigger.stop();
/// # Ok(())
/// # }
/// ```
pub struct PeriodicReloadingTrigger {
    handle: JoinHandle<()>,
}

impl PeriodicReloadingTrigger {
    /// Start checking `controller` every `period`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(controller: Arc<ReloadingController>, period: Duration, sink: F) -> Self
    where
        F: Fn(&ReloadingEvent<'_, ()>) + Send + Sync + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if let Some(event) = controller.check_for_reloading::<()>(None) {
                    sink(&event);
                }
            }
        });

        Self { handle }
    }

    /// Stop the periodic checks.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for PeriodicReloadingTrigger {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
