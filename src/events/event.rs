use chrono::{DateTime, Utc};

/// What happened, who it happened to, and when.
///
/// Emitted by the login/logout actions and the session gate. Events carry
/// usernames and request paths but never passwords, tokens or the signing
/// secret.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    LoginSucceeded {
        username: String,
        at: DateTime<Utc>,
    },
    LoginFailed {
        username: String,
        at: DateTime<Utc>,
    },
    LogoutCompleted {
        at: DateTime<Utc>,
    },
    /// A protected path was requested without a valid session.
    SessionRejected {
        path: String,
        at: DateTime<Utc>,
    },
}

impl AuthEvent {
    /// Stable dotted name for log and trace records.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginSucceeded { .. } => "auth.login.success",
            Self::LoginFailed { .. } => "auth.login.failed",
            Self::LogoutCompleted { .. } => "auth.logout.success",
            Self::SessionRejected { .. } => "auth.session.rejected",
        }
    }

    /// When the event happened.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::LoginSucceeded { at, .. }
            | Self::LoginFailed { at, .. }
            | Self::LogoutCompleted { at, .. }
            | Self::SessionRejected { at, .. } => *at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let now = Utc::now();

        let cases = [
            (
                AuthEvent::LoginSucceeded {
                    username: "alice".to_owned(),
                    at: now,
                },
                "auth.login.success",
            ),
            (
                AuthEvent::LoginFailed {
                    username: "alice".to_owned(),
                    at: now,
                },
                "auth.login.failed",
            ),
            (AuthEvent::LogoutCompleted { at: now }, "auth.logout.success"),
            (
                AuthEvent::SessionRejected {
                    path: "/private/dashboard".to_owned(),
                    at: now,
                },
                "auth.session.rejected",
            ),
        ];

        for (event, expected) in cases {
            assert_eq!(event.name(), expected);
        }
    }

    #[test]
    fn test_event_timestamp() {
        let now = Utc::now();
        let event = AuthEvent::LoginSucceeded {
            username: "alice".to_owned(),
            at: now,
        };

        assert_eq!(event.timestamp(), now);
    }

    #[test]
    fn test_event_debug_carries_context() {
        let event = AuthEvent::SessionRejected {
            path: "/private/dashboard".to_owned(),
            at: Utc::now(),
        };

        let debug_str = format!("{event:?}");
        assert!(debug_str.contains("SessionRejected"));
        assert!(debug_str.contains("/private/dashboard"));
    }
}
