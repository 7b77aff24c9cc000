//! Request-time authorization gate.
//!
//! The gate inspects a request path and an optional session token and decides
//! whether the request passes untouched, proceeds with an authenticated
//! identity attached, or gets redirected to the login page with the original
//! path preserved for post-login return.

use chrono::Utc;

use crate::session::verify_token_at;
use crate::SecretString;

/// Identity attached to a request that passed the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
}

/// Authentication state resolved from a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    Authenticated(AuthUser),
    Unauthenticated,
}

impl AuthDecision {
    /// Returns the authenticated user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            AuthDecision::Authenticated(user) => Some(user),
            AuthDecision::Unauthenticated => None,
        }
    }
}

/// Path conventions the gate enforces.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Everything under this prefix requires a valid session.
    ///
    /// Matching is plain string prefix: `/privatestuff` is covered by the
    /// default `/private`.
    pub protected_prefix: String,
    /// Where unauthenticated requests are sent.
    pub login_path: String,
    /// Query parameter carrying the originally requested path.
    ///
    /// Renaming this only changes the redirect URL; the login form always
    /// posts the pending target back in a field named `redirect`, so a login
    /// page served under a custom name must carry the value across.
    pub redirect_param: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            protected_prefix: "/private".to_owned(),
            login_path: "/login".to_owned(),
            redirect_param: "redirect".to_owned(),
        }
    }
}

/// Outcome of gating a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Path is outside the protected prefix; the request proceeds untouched.
    Bypass,
    /// Session verified; the identity travels with the request.
    Allow(AuthUser),
    /// No valid session on a protected path; send the client here.
    Redirect(String),
}

/// Decides, per request, between [`GateDecision::Bypass`],
/// [`GateDecision::Allow`] and [`GateDecision::Redirect`].
///
/// The gate holds its own copy of the signing secret so the decision runs
/// without any other collaborator.
#[derive(Debug, Clone)]
pub struct AuthGate {
    config: GateConfig,
    secret: SecretString,
}

impl AuthGate {
    #[must_use]
    pub fn new(config: GateConfig, secret: SecretString) -> Self {
        Self { config, secret }
    }

    #[must_use]
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Gates a request against the current wall clock.
    #[must_use]
    pub fn decide(&self, path: &str, token: Option<&str>) -> GateDecision {
        self.decide_at(path, token, Utc::now().timestamp())
    }

    /// Gates a request as of `now` (epoch seconds).
    #[must_use]
    pub fn decide_at(&self, path: &str, token: Option<&str>, now: i64) -> GateDecision {
        if !path.starts_with(&self.config.protected_prefix) {
            return GateDecision::Bypass;
        }

        match self.session_state_at(token, now) {
            AuthDecision::Authenticated(user) => GateDecision::Allow(user),
            AuthDecision::Unauthenticated => GateDecision::Redirect(self.login_redirect(path)),
        }
    }

    /// Resolves a token into an authentication state against the wall clock.
    #[must_use]
    pub fn session_state(&self, token: Option<&str>) -> AuthDecision {
        self.session_state_at(token, Utc::now().timestamp())
    }

    /// Resolves a token into an authentication state as of `now`.
    ///
    /// Absent, tampered, malformed and expired tokens all come back
    /// [`AuthDecision::Unauthenticated`].
    #[must_use]
    pub fn session_state_at(&self, token: Option<&str>, now: i64) -> AuthDecision {
        let Some(token) = token else {
            return AuthDecision::Unauthenticated;
        };

        match verify_token_at(token, &self.secret, now) {
            Some(payload) => AuthDecision::Authenticated(AuthUser {
                username: payload.username,
            }),
            None => AuthDecision::Unauthenticated,
        }
    }

    /// Builds the login redirect target for a rejected request, with the
    /// requested path percent-encoded into the redirect parameter.
    #[must_use]
    pub fn login_redirect(&self, requested_path: &str) -> String {
        format!(
            "{}?{}={}",
            self.config.login_path,
            self.config.redirect_param,
            urlencoding::encode(requested_path)
        )
    }
}
