use async_trait::async_trait;

use super::AuthEvent;

/// Receives authentication events.
///
/// Dispatch awaits each listener in registration order, so a slow listener
/// delays the ones behind it; offload heavy work instead of blocking here.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::atomic::{AtomicU64, Ordering};
///
/// use async_trait::async_trait;
/// use wicket::events::{AuthEvent, Listener};
///
/// #[derive(Default)]
/// struct FailureCounter {
///     failures: AtomicU64,
/// }
///
/// #[async_trait]
/// impl Listener for FailureCounter {
///     async fn handle(&self, event: &AuthEvent) {
///         if matches!(event, AuthEvent::LoginFailed { .. }) {
///             self.failures.fetch_add(1, Ordering::Relaxed);
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Listener: Send + Sync + 'static {
    /// Called for every dispatched event; match on the variants of interest.
    async fn handle(&self, event: &AuthEvent);
}
