//! HTTP handlers for the login and logout endpoints.

use std::fmt;

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use super::middleware::session_cookie;
use super::routes::AppState;
use crate::actions::{LoginAction, LogoutAction};
use crate::session::SessionConfig;
use crate::transport::CookieTransport;
use crate::SecretString;

/// Form body accepted by the login endpoint.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Path to return to after a successful login, usually planted by the
    /// gate's redirect.
    ///
    /// The field name is fixed: even with a custom
    /// [`redirect_param`](crate::gate::GateConfig::redirect_param), the form
    /// posts the target as `redirect`.
    pub redirect: Option<String>,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("redirect", &self.redirect)
            .finish()
    }
}

/// `POST /login`: verify the submitted credentials.
///
/// On success, sets the session cookie and redirects to the sanitized
/// `redirect` target (or `/`). On failure, redirects back to the login page
/// with the pending target preserved; the response never says which part of
/// the credential was wrong.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response {
    let action = LoginAction::new(
        state.config.credentials.clone(),
        state.config.session.clone(),
        state.hasher.clone(),
    );
    let mut cookies = ResponseCookies::new(&state.config.session, &headers);
    let password = SecretString::new(form.password.as_str());

    match action
        .execute(&form.username, &password, &mut cookies)
        .await
    {
        Ok(_token) => {
            let target = sanitize_redirect(form.redirect.as_deref());
            redirect_with_cookie(&target, cookies.take_header())
        }
        Err(_) => {
            let location = failure_location(&state, form.redirect.as_deref());
            Redirect::to(&location).into_response()
        }
    }
}

/// `POST /logout`: clear the session cookie and land on the login page.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let mut cookies = ResponseCookies::new(&state.config.session, &headers);

    LogoutAction::new().execute(&mut cookies).await;

    redirect_with_cookie(&state.config.gate.login_path, cookies.take_header())
}

/// [`CookieTransport`] over HTTP headers: reads from the request's `Cookie`
/// header, stages at most one `Set-Cookie` value for the response.
struct ResponseCookies<'a> {
    config: &'a SessionConfig,
    request_headers: &'a HeaderMap,
    header: Option<HeaderValue>,
}

impl<'a> ResponseCookies<'a> {
    fn new(config: &'a SessionConfig, request_headers: &'a HeaderMap) -> Self {
        Self {
            config,
            request_headers,
            header: None,
        }
    }

    fn take_header(&mut self) -> Option<HeaderValue> {
        self.header.take()
    }
}

impl CookieTransport for ResponseCookies<'_> {
    fn store(&mut self, token: &str, ttl_seconds: i64) {
        self.header = build_cookie(self.config, token, ttl_seconds);
    }

    fn clear(&mut self) {
        self.header = build_cookie(self.config, "", 0);
    }

    fn read(&self) -> Option<String> {
        session_cookie(self.request_headers, &self.config.cookie_name)
    }
}

fn build_cookie(config: &SessionConfig, value: &str, max_age: i64) -> Option<HeaderValue> {
    let mut cookie = format!(
        "{}={}; Path={}; Max-Age={}",
        config.cookie_name, value, config.cookie_path, max_age
    );
    if config.cookie_http_only {
        cookie.push_str("; HttpOnly");
    }
    cookie.push_str("; SameSite=");
    cookie.push_str(config.cookie_same_site.as_str());
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }

    HeaderValue::from_str(&cookie).ok()
}

fn redirect_with_cookie(location: &str, cookie: Option<HeaderValue>) -> Response {
    let mut response = Redirect::to(location).into_response();
    if let Some(cookie) = cookie {
        response.headers_mut().insert(SET_COOKIE, cookie);
    }
    response
}

fn sanitize_redirect(target: Option<&str>) -> String {
    match target {
        Some(path) if is_local_path(path) => path.to_owned(),
        _ => "/".to_owned(),
    }
}

fn failure_location(state: &AppState, pending_redirect: Option<&str>) -> String {
    match pending_redirect {
        Some(target) if is_local_path(target) => state.gate.login_redirect(target),
        _ => state.config.gate.login_path.clone(),
    }
}

/// Post-login targets must be local absolute paths. Protocol-relative
/// (`//host`) and backslash variants are rejected.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}
