mod config;
mod token;

pub use config::{SameSite, SessionConfig};
pub use token::{create_token, create_token_at, verify_token, verify_token_at};

use serde::{Deserialize, Serialize};

/// Claims carried inside a session token.
///
/// Serializes with the compact wire names `iat` and `exp` for the
/// timestamps, both in epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub username: String,
    #[serde(rename = "iat")]
    pub issued_at: i64,
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl SessionPayload {
    /// Returns true once `now` has reached the expiry instant.
    ///
    /// Expiry is exclusive: a payload with `exp == now` is already expired.
    #[must_use]
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}
