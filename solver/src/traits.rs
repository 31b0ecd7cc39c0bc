//! Trait definitions with mockall annotations for testing
//!
//! The notification channel is the solver's one injection seam: the engine
//! emits events through it, a swappable sink consumes them, and consumption
//! failure stays isolated from the producer.

use shared::SolverNotification;

/// Notification channel abstraction.
///
/// Implementations deliver the event to whoever is currently listening and
/// swallow every delivery failure: a closed or missing receiver must never
/// abort or corrupt an in-progress search.
#[mockall::automock]
#[async_trait::async_trait]
pub trait NotificationSink: Send + Sync {
    /// Offer one notification to the current listener, if any
    async fn notify(&self, notification: SolverNotification);
}
