//! Configuration types for the authentication subsystem.
//!
//! This module provides centralized configuration for the single accepted
//! credential, the session cookie, and the authorization gate.
//!
//! # Example
//!
//! ```rust
//! use chrono::Duration;
//! use wicket::{AuthConfig, Credentials, SecretString, SessionConfig};
//!
//! let config = AuthConfig::new(
//!     Credentials {
//!         username: "alice".to_owned(),
//!         password_record: "c2FsdA==:Eg+2z/z4syxD5yJSVsT4N6hlSMkszDVICAWYfLcL4Xs=".to_owned(),
//!     },
//!     SessionConfig {
//!         secret: SecretString::new("a-signing-secret-of-at-least-32-bytes!"),
//!         session_ttl: Duration::hours(12),
//!         ..Default::default()
//!     },
//! );
//! ```
//!
//! In production, prefer [`AuthConfig::from_env`] and keep the values in the
//! deployment environment.

use std::env;
use std::str::FromStr;

use base64::{engine::general_purpose, Engine as _};
use chrono::Duration;

use crate::crypto::{KEY_LENGTH, SALT_LENGTH};
use crate::gate::GateConfig;
use crate::session::SessionConfig;
use crate::{AuthError, SecretString};

/// Default session lifetime in seconds (7 days).
pub const DEFAULT_SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// The single credential pair this deployment accepts.
///
/// There is no user database; the expected username and the PBKDF2 record of
/// the expected password are provisioned by the operator.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Expected username, compared case-sensitively.
    pub username: String,
    /// Stored password record in the form `base64(salt):base64(key)`.
    pub password_record: String,
}

/// Top-level configuration: credential, session cookie, gate paths.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub credentials: Credentials,
    pub session: SessionConfig,
    pub gate: GateConfig,
}

impl AuthConfig {
    /// Creates a configuration with default gate paths.
    #[must_use]
    pub fn new(credentials: Credentials, session: SessionConfig) -> Self {
        Self {
            credentials,
            session,
            gate: GateConfig::default(),
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// `AUTH_USERNAME`, `AUTH_PASSWORD_HASH` and `SESSION_SECRET` are
    /// required. `SESSION_MAX_AGE` is the session lifetime in seconds and
    /// defaults to 7 days.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ConfigurationError` when a required variable is
    /// missing or any value fails [`validate`](Self::validate). Configuration
    /// problems are meant to stop startup, not surface per request.
    pub fn from_env() -> Result<Self, AuthError> {
        let username = require_env("AUTH_USERNAME")?;
        let password_record = require_env("AUTH_PASSWORD_HASH")?;
        let secret = SecretString::new(require_env("SESSION_SECRET")?);
        let ttl_secs = parse_env_or_default("SESSION_MAX_AGE", DEFAULT_SESSION_TTL_SECS)?;
        let session_ttl = Duration::try_seconds(ttl_secs).ok_or_else(|| {
            AuthError::ConfigurationError("SESSION_MAX_AGE is out of range".to_owned())
        })?;

        let config = Self {
            credentials: Credentials {
                username,
                password_record,
            },
            session: SessionConfig {
                session_ttl,
                secret,
                ..SessionConfig::default()
            },
            gate: GateConfig::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates the credential record and the session settings.
    ///
    /// The password record must parse as `base64(salt):base64(key)` with a
    /// 16-byte salt and a 32-byte key, so a mangled record fails at startup
    /// instead of silently failing every login.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.credentials.username.is_empty() {
            return Err(AuthError::ConfigurationError(
                "username must not be empty".to_owned(),
            ));
        }

        let Some((salt_b64, key_b64)) = self.credentials.password_record.split_once(':') else {
            return Err(AuthError::ConfigurationError(
                "password record must be base64(salt):base64(key)".to_owned(),
            ));
        };
        let salt = general_purpose::STANDARD.decode(salt_b64).map_err(|_| {
            AuthError::ConfigurationError("password record salt is not valid base64".to_owned())
        })?;
        let key = general_purpose::STANDARD.decode(key_b64).map_err(|_| {
            AuthError::ConfigurationError("password record key is not valid base64".to_owned())
        })?;
        if salt.len() != SALT_LENGTH {
            return Err(AuthError::ConfigurationError(format!(
                "password record salt must be {} bytes",
                SALT_LENGTH
            )));
        }
        if key.len() != KEY_LENGTH {
            return Err(AuthError::ConfigurationError(format!(
                "password record key must be {} bytes",
                KEY_LENGTH
            )));
        }

        self.session.validate()
    }
}

fn require_env(key: &str) -> Result<String, AuthError> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(AuthError::ConfigurationError(format!("{} must be set", key))),
    }
}

fn parse_env_or_default<T: FromStr>(key: &str, default: T) -> Result<T, AuthError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AuthError::ConfigurationError(format!("{} is not a valid value", key))
        }),
        Err(_) => Ok(default),
    }
}
