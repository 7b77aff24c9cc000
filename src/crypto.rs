//! Password hashing and constant-time comparison.
//!
//! Stored credentials are PBKDF2-HMAC-SHA256 records in the form
//! `base64(salt):base64(derived key)`. Verification re-derives the key from
//! the submitted password and compares it in constant time.

use base64::{engine::general_purpose, Engine as _};
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

use crate::AuthError;

/// Salt length in bytes for newly created records.
pub const SALT_LENGTH: usize = 16;

/// Derived key length in bytes.
pub const KEY_LENGTH: usize = 32;

/// Default PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Trait for password hashing and verification.
///
/// This trait allows pluggable password hashing implementations.
/// The default implementation is [`Pbkdf2Hasher`].
///
/// # Example
///
/// ```rust
/// use wicket::crypto::{PasswordHasher, Pbkdf2Hasher};
///
/// let hasher = Pbkdf2Hasher::default();
/// let record = hasher.hash("mypassword").unwrap();
/// assert!(hasher.verify("mypassword", &record).unwrap());
/// assert!(!hasher.verify("wrongpassword", &record).unwrap());
/// ```
pub trait PasswordHasher: Send + Sync {
    /// Hash a password into a storable record.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHashError` if hashing fails.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a stored record.
    ///
    /// A record that does not parse must yield `Ok(false)` rather than an
    /// error, so callers cannot distinguish a bad record from a bad password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHashError` only for failures unrelated to
    /// the record contents.
    fn verify(&self, password: &str, record: &str) -> Result<bool, AuthError>;
}

/// PBKDF2-HMAC-SHA256 password hasher.
///
/// Records carry the salt but not the iteration count, so a record only
/// verifies against a hasher configured with the same count it was created
/// with. The default of 100 000 iterations is the deployment contract.
///
/// Both [`hash`](PasswordHasher::hash) and [`verify`](PasswordHasher::verify)
/// are CPU-bound and cost tens of milliseconds at the default count. Callers
/// on a busy async runtime should move them onto a blocking thread, e.g. with
/// `tokio::task::spawn_blocking`.
///
/// # Example
///
/// ```rust
/// use wicket::crypto::Pbkdf2Hasher;
///
/// // Default settings (100 000 iterations)
/// let hasher = Pbkdf2Hasher::default();
///
/// // Custom iteration count
/// let hasher = Pbkdf2Hasher::new(200_000);
/// ```
#[derive(Debug, Clone)]
pub struct Pbkdf2Hasher {
    iterations: u32,
}

impl Default for Pbkdf2Hasher {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

impl Pbkdf2Hasher {
    /// Creates a hasher with a custom iteration count.
    #[must_use]
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    fn derive_key(&self, password: &str, salt: &[u8]) -> [u8; KEY_LENGTH] {
        let mut key = [0u8; KEY_LENGTH];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, self.iterations, &mut key);
        key
    }
}

impl PasswordHasher for Pbkdf2Hasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let mut salt = [0u8; SALT_LENGTH];
        OsRng.fill_bytes(&mut salt);

        let key = self.derive_key(password, &salt);

        Ok(format!(
            "{}:{}",
            general_purpose::STANDARD.encode(salt),
            general_purpose::STANDARD.encode(key)
        ))
    }

    fn verify(&self, password: &str, record: &str) -> Result<bool, AuthError> {
        // Split on the first separator; the key segment is fixed-length
        // base64 and never contains one.
        let Some((salt_b64, key_b64)) = record.split_once(':') else {
            return Ok(false);
        };
        let Ok(salt) = general_purpose::STANDARD.decode(salt_b64) else {
            return Ok(false);
        };
        let Ok(stored_key) = general_purpose::STANDARD.decode(key_b64) else {
            return Ok(false);
        };

        let derived = self.derive_key(password, &salt);
        Ok(constant_time_eq(&derived, &stored_key))
    }
}

/// Constant-time comparison to prevent timing attacks.
///
/// Every byte is examined regardless of where the first difference sits;
/// only a length mismatch returns early.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
