use async_trait::async_trait;

use crate::events::{AuthEvent, Listener};

/// Writes one `log` record per event, in the crate's `key="value"` style.
///
/// Usernames and request paths are included; passwords and tokens never
/// travel in events in the first place.
///
/// # Example
///
/// ```rust,ignore
/// register_event_listeners(|registry| {
///     registry.listen(LoggingListener::with_level(log::Level::Debug));
/// });
/// ```
pub struct LoggingListener {
    level: log::Level,
}

impl LoggingListener {
    /// Listener emitting at `Info`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_level(log::Level::Info)
    }

    /// Listener emitting at a chosen level.
    #[must_use]
    pub fn with_level(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LoggingListener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Listener for LoggingListener {
    async fn handle(&self, event: &AuthEvent) {
        let detail = match event {
            AuthEvent::LoginSucceeded { username, .. }
            | AuthEvent::LoginFailed { username, .. } => {
                format!(" username=\"{username}\"")
            }
            AuthEvent::SessionRejected { path, .. } => format!(" path=\"{path}\""),
            AuthEvent::LogoutCompleted { .. } => String::new(),
        };

        log::log!(
            target: "wicket::events",
            self.level,
            "event=\"{}\"{}",
            event.name(),
            detail
        );
    }
}
