use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;

use super::routes::AppState;
use crate::events::{dispatch, AuthEvent};
use crate::gate::{AuthUser, GateDecision};

/// Session gate middleware.
///
/// Reads the session cookie, asks the [`AuthGate`](crate::AuthGate) for a
/// decision, and either forwards the request (attaching [`AuthUser`] as an
/// extension on protected paths) or redirects to the login page.
pub async fn session_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let token = session_cookie(request.headers(), &state.config.session.cookie_name);

    match state.gate.decide(&path, token.as_deref()) {
        GateDecision::Bypass => next.run(request).await,
        GateDecision::Allow(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        GateDecision::Redirect(location) => {
            dispatch(AuthEvent::SessionRejected {
                path,
                at: Utc::now(),
            })
            .await;

            Redirect::to(&location).into_response()
        }
    }
}

/// Extracts the named cookie's value from a `Cookie` header.
pub fn session_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let header = headers.get(COOKIE)?.to_str().ok()?;

    for pair in header.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=') {
            if name.trim() == cookie_name {
                return Some(value.trim().to_owned());
            }
        }
    }
    None
}

/// Extracts the authenticated user attached by [`session_gate`].
///
/// Rejects with `401 Unauthorized` when the extension is missing, which
/// means the route was mounted outside the gate.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthUser);

impl CurrentUser {
    pub fn into_inner(self) -> AuthUser {
        self.0
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
