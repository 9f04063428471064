use std::time::Duration;

pub use tagmix_core::gateways::observe::{OperationObserver, Outcome};
use tagmix_core::usecases::ErrorKind;

/// Reports finished operations through the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver {
    /// Operations that take longer are logged as warnings.
    pub slow_operation: Option<Duration>,
}

impl LogObserver {
    pub const fn new(slow_operation: Option<Duration>) -> Self {
        Self { slow_operation }
    }

    fn is_slow(&self, took: Duration) -> bool {
        self.slow_operation.is_some_and(|limit| took > limit)
    }
}

impl OperationObserver for LogObserver {
    fn operation_finished(&self, operation: &'static str, took: Duration, outcome: Outcome) {
        match outcome {
            Outcome::Failed(ErrorKind::Internal) => {
                log::error!("Operation {operation} failed after {took:?}");
            }
            _ if self.is_slow(took) => {
                log::warn!("Slow operation {operation} took {took:?}: {outcome:?}");
            }
            _ => {
                log::debug!("Operation {operation} took {took:?}: {outcome:?}");
            }
        }
    }
}

/// Ignores all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl OperationObserver for NoObserver {
    fn operation_finished(&self, _: &'static str, _: Duration, _: Outcome) {}
}
