//! Single-credential session authentication.
//!
//! Verifies one operator-provisioned username/password pair (PBKDF2 records,
//! no user database), issues HMAC-signed session tokens carried in a cookie,
//! and gates protected paths with a redirect-to-login flow.

pub mod actions;
pub mod api;
pub mod config;
pub mod crypto;
pub mod events;
pub mod gate;
pub mod session;
pub mod transport;

mod secret;

pub use config::AuthConfig;
pub use config::Credentials;
pub use crypto::PasswordHasher;
pub use crypto::Pbkdf2Hasher;
pub use events::register_event_listeners;
pub use gate::AuthDecision;
pub use gate::AuthGate;
pub use gate::AuthUser;
pub use gate::GateConfig;
pub use gate::GateDecision;
pub use secret::SecretString;
pub use session::SessionConfig;
pub use session::SessionPayload;
pub use transport::CookieTransport;

#[cfg(any(test, feature = "mocks"))]
pub use transport::MemoryCookieJar;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    InvalidCredentials,
    PasswordHashError,
    TokenInvalid,
    ConfigurationError(String),
}

impl std::error::Error for AuthError {}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthError::PasswordHashError => write!(f, "Failed to hash password"),
            AuthError::TokenInvalid => write!(f, "Invalid session token"),
            AuthError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}
