use std::sync::OnceLock;

use super::{AuthEvent, Listener};

// Written once at startup, read on every dispatch. No lock on the hot path.
static LISTENERS: OnceLock<EventRegistry> = OnceLock::new();

/// Collects listeners during startup registration.
///
/// Obtained through the closure passed to [`register_event_listeners`];
/// never constructed directly.
pub struct EventRegistry {
    entries: Vec<Box<dyn Listener>>,
}

impl EventRegistry {
    /// Adds a listener. Listeners run in registration order on every event.
    pub fn listen(&mut self, listener: impl Listener) -> &mut Self {
        self.entries.push(Box::new(listener));
        self
    }
}

/// Installs the process-wide listener set.
///
/// Call once during startup, before serving requests. Without a call,
/// dispatched events vanish silently. A second call is ignored apart from a
/// warning; the first set stays installed.
///
/// # Example
///
/// ```rust,ignore
/// use wicket::register_event_listeners;
/// use wicket::events::listeners::LoggingListener;
///
/// register_event_listeners(|registry| {
///     registry
///         .listen(LoggingListener::new())
///         .listen(FailureCounter::default());
/// });
/// ```
pub fn register_event_listeners<F>(configure: F)
where
    F: FnOnce(&mut EventRegistry),
{
    let mut registry = EventRegistry {
        entries: Vec::new(),
    };
    configure(&mut registry);

    if LISTENERS.set(registry).is_err() {
        log::warn!(
            target: "wicket",
            "msg=\"event listeners already installed, extra registration ignored\""
        );
    }
}

/// Hands an event to every installed listener, in order.
///
/// A no-op when nothing was registered.
pub async fn dispatch(event: AuthEvent) {
    let Some(registry) = LISTENERS.get() else {
        return;
    };

    for listener in &registry.entries {
        listener.handle(&event).await;
    }
}
