use std::fmt;

/// An opaque string that refuses to print itself.
///
/// The session signing secret and submitted passwords travel through this
/// wrapper. `Debug` and `Display` both render `[REDACTED]`, so a stray log
/// statement or panic message cannot leak the value; the raw bytes are only
/// reachable through [`expose_secret`](SecretString::expose_secret).
///
/// # Example
///
/// ```rust
/// use wicket::SecretString;
///
/// let signing_secret = SecretString::new("super-secret-signing-key");
///
/// assert_eq!(format!("{:?}", signing_secret), "SecretString([REDACTED])");
/// assert_eq!(signing_secret.expose_secret(), "super-secret-signing-key");
/// ```
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exposes the wrapped value.
    ///
    /// Call this only at the point where the raw bytes are consumed, such as
    /// keying an HMAC or feeding the password hasher.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_redact() {
        let secret = SecretString::new("hunter2");

        assert_eq!(format!("{secret:?}"), "SecretString([REDACTED])");
        assert_eq!(format!("{secret}"), "[REDACTED]");
    }

    #[test]
    fn test_expose_secret() {
        let secret = SecretString::new("hunter2");
        assert_eq!(secret.expose_secret(), "hunter2");
    }

    #[test]
    fn test_len_and_empty() {
        assert!(SecretString::new("").is_empty());
        assert!(!SecretString::new("abcd").is_empty());
        assert_eq!(SecretString::new("abcd").len(), 4);
    }
}
