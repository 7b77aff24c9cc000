use chrono::Utc;

use crate::events::{dispatch, AuthEvent};
use crate::transport::CookieTransport;

/// Ends a session by clearing the cookie.
///
/// Tokens are stateless, so an already-issued token stays valid until its
/// natural expiry; there is no server-side session to revoke.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogoutAction;

impl LogoutAction {
    #[must_use]
    pub fn new() -> Self {
        LogoutAction
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "logout", skip_all)
    )]
    pub async fn execute<T: CookieTransport>(&self, transport: &mut T) {
        transport.clear();

        dispatch(AuthEvent::LogoutCompleted { at: Utc::now() }).await;

        log::info!(target: "wicket::auth", "msg=\"logout\"");
    }
}
