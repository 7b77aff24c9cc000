use chrono::Utc;

use crate::config::Credentials;
use crate::crypto::PasswordHasher;
use crate::events::{dispatch, AuthEvent};
use crate::session::{create_token, SessionConfig};
use crate::transport::CookieTransport;
use crate::{AuthError, SecretString};

/// Checks a submitted credential pair and, on success, issues a session
/// token and hands it to the cookie transport.
pub struct LoginAction<H: PasswordHasher> {
    credentials: Credentials,
    session: SessionConfig,
    hasher: H,
}

impl<H: PasswordHasher> LoginAction<H> {
    pub fn new(credentials: Credentials, session: SessionConfig, hasher: H) -> Self {
        LoginAction {
            credentials,
            session,
            hasher,
        }
    }

    /// Checks a submitted username and password against the configured
    /// credential.
    ///
    /// The username comparison runs first; on a mismatch the hasher is never
    /// consulted. There is exactly one account, so this reveals nothing about
    /// which usernames exist.
    pub fn authenticate(&self, username: &str, password: &SecretString) -> bool {
        if username != self.credentials.username {
            return false;
        }

        matches!(
            self.hasher.verify(
                password.expose_secret(),
                &self.credentials.password_record
            ),
            Ok(true)
        )
    }

    /// Runs the full login flow.
    ///
    /// Password verification is CPU-bound (tens of milliseconds at the
    /// default PBKDF2 cost), so callers handling real traffic may want to
    /// run this inside `spawn_blocking`.
    ///
    /// # Returns
    ///
    /// - `Ok(token)` - credentials verified, token stored in the transport
    /// - `Err(AuthError::InvalidCredentials)` - any credential failure,
    ///   without distinguishing the cause
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "login", skip_all, err)
    )]
    pub async fn execute<T: CookieTransport>(
        &self,
        username: &str,
        password: &SecretString,
        transport: &mut T,
    ) -> Result<String, AuthError> {
        if !self.authenticate(username, password) {
            dispatch(AuthEvent::LoginFailed {
                username: username.to_owned(),
                at: Utc::now(),
            })
            .await;

            log::warn!(target: "wicket::auth", "msg=\"login failed\"");

            return Err(AuthError::InvalidCredentials);
        }

        let ttl_seconds = self.session.ttl_seconds();
        let token = create_token(username, &self.session.secret, ttl_seconds)?;
        transport.store(&token, ttl_seconds);

        dispatch(AuthEvent::LoginSucceeded {
            username: username.to_owned(),
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "wicket::auth",
            "msg=\"login success\" username=\"{}\"",
            username
        );

        Ok(token)
    }
}
