use async_trait::async_trait;

use crate::events::{AuthEvent, Listener};

/// Bridges events into `tracing` with structured fields.
///
/// Failed logins surface at `WARN`, everything else at `INFO`. Requires the
/// `tracing` feature.
pub struct TracingListener;

#[async_trait]
impl Listener for TracingListener {
    async fn handle(&self, event: &AuthEvent) {
        match event {
            AuthEvent::LoginSucceeded { username, .. } => {
                tracing::info!(target: "wicket::events", name = event.name(), %username);
            }
            AuthEvent::LoginFailed { username, .. } => {
                tracing::warn!(target: "wicket::events", name = event.name(), %username);
            }
            AuthEvent::LogoutCompleted { .. } => {
                tracing::info!(target: "wicket::events", name = event.name());
            }
            AuthEvent::SessionRejected { path, .. } => {
                tracing::info!(target: "wicket::events", name = event.name(), %path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[tokio::test]
    async fn test_handle_every_variant() {
        let listener = TracingListener;
        let now = Utc::now();

        let events = [
            AuthEvent::LoginSucceeded {
                username: "alice".to_owned(),
                at: now,
            },
            AuthEvent::LoginFailed {
                username: "alice".to_owned(),
                at: now,
            },
            AuthEvent::LogoutCompleted { at: now },
            AuthEvent::SessionRejected {
                path: "/private/dashboard".to_owned(),
                at: now,
            },
        ];

        for event in events {
            listener.handle(&event).await;
        }
    }
}
