//! Cookie transport seam.
//!
//! The core never touches HTTP cookie mechanics. It hands tokens to a
//! [`CookieTransport`] on login, asks it to clear on logout, and reads the
//! opaque token string back through it on protected requests. HTTP layers
//! implement the trait over their own request/response types.

/// Carries session tokens between the core and an HTTP layer.
pub trait CookieTransport {
    /// Stores a freshly issued token with a matching cookie lifetime in
    /// seconds.
    fn store(&mut self, token: &str, ttl_seconds: i64);

    /// Clears the session cookie.
    fn clear(&mut self);

    /// Reads the stored token, if any.
    fn read(&self) -> Option<String>;
}

/// In-memory cookie jar for tests and examples.
#[cfg(any(test, feature = "mocks"))]
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    token: Option<String>,
    ttl_seconds: Option<i64>,
}

#[cfg(any(test, feature = "mocks"))]
impl MemoryCookieJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifetime recorded with the last stored token.
    #[must_use]
    pub fn stored_ttl(&self) -> Option<i64> {
        self.ttl_seconds
    }
}

#[cfg(any(test, feature = "mocks"))]
impl CookieTransport for MemoryCookieJar {
    fn store(&mut self, token: &str, ttl_seconds: i64) {
        self.token = Some(token.to_owned());
        self.ttl_seconds = Some(ttl_seconds);
    }

    fn clear(&mut self) {
        self.token = None;
        self.ttl_seconds = None;
    }

    fn read(&self) -> Option<String> {
        self.token.clone()
    }
}
