//! Axum integration: session gate middleware, login/logout handlers.
//!
//! Wire it up with [`AppState`], [`auth_routes`] and
//! [`session_gate`] behind `axum::middleware::from_fn_with_state`:
//!
//! ```rust,ignore
//! let state = AppState::new(AuthConfig::from_env()?);
//! let app = Router::new()
//!     .route("/private/dashboard", get(dashboard))
//!     .merge(auth_routes(&state))
//!     .layer(middleware::from_fn_with_state(state.clone(), session_gate))
//!     .with_state(state);
//! ```

mod handlers;
mod middleware;
mod routes;

pub use handlers::{login, logout, LoginForm};
pub use middleware::{session_cookie, session_gate, CurrentUser};
pub use routes::{auth_routes, AppState};
