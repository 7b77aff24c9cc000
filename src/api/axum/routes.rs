use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers;
use crate::config::AuthConfig;
use crate::crypto::Pbkdf2Hasher;
use crate::gate::AuthGate;

/// Shared state for the auth endpoints and the session gate.
///
/// The hasher is the concrete [`Pbkdf2Hasher`]: the stored record format
/// fixes the algorithm, so this layer does not carry a hasher type
/// parameter.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AuthConfig>,
    pub gate: Arc<AuthGate>,
    pub hasher: Pbkdf2Hasher,
}

impl AppState {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        let gate = AuthGate::new(config.gate.clone(), config.session.secret.clone());
        Self {
            config: Arc::new(config),
            gate: Arc::new(gate),
            hasher: Pbkdf2Hasher::default(),
        }
    }
}

/// Login and logout endpoints.
///
/// The login route is mounted at the configured login path so the gate's
/// redirects and the form submission land in the same place. Logout is fixed
/// at `/logout`; it never appears in a redirect.
pub fn auth_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(&state.config.gate.login_path, post(handlers::login))
        .route("/logout", post(handlers::logout))
}
