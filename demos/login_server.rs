#![allow(
    clippy::print_stdout,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items
)]

//! Login Gate Server Example
//!
//! A complete example wiring the session gate, login form and logout into an
//! axum app. Everything under `/private` requires a valid session cookie;
//! anything else is public.
//!
//! Run with: `cargo run --example login_server --features axum_api`
//!
//! Then:
//!   curl -i http://localhost:8080/private/dashboard
//!     (302-family redirect to /login?redirect=%2Fprivate%2Fdashboard)
//!
//!   curl -i -X POST http://localhost:8080/login \
//!     -d 'username=admin&password=securepassword&redirect=/private/dashboard' \
//!     -c cookies.txt
//!
//!   curl -i http://localhost:8080/private/dashboard -b cookies.txt

use axum::extract::Query;
use axum::response::Html;
use axum::routing::get;
use axum::{middleware, Router};
use serde::Deserialize;

use wicket::api::axum::{auth_routes, session_gate, AppState, CurrentUser};
use wicket::crypto::{PasswordHasher, Pbkdf2Hasher};
use wicket::events::listeners::LoggingListener;
use wicket::{
    register_event_listeners, AuthConfig, Credentials, SecretString, SessionConfig,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // In production, load everything from the environment instead:
    // `AuthConfig::from_env()`.
    let session_secret = std::env::var("SESSION_SECRET")
        .unwrap_or_else(|_| "dev-only-secret-key-at-least-32-bytes!".to_owned());

    let password_record = Pbkdf2Hasher::default().hash("securepassword").unwrap();

    let config = AuthConfig::new(
        Credentials {
            username: "admin".to_owned(),
            password_record,
        },
        SessionConfig {
            cookie_secure: false, // set to true in production with HTTPS
            secret: SecretString::new(session_secret),
            ..Default::default()
        },
    );
    config.validate().unwrap();

    register_event_listeners(|registry| {
        registry.listen(LoggingListener::new());
    });

    let state = AppState::new(config);

    let app = Router::new()
        .route("/", get(home))
        .route("/login", get(login_page))
        .route("/private/dashboard", get(dashboard))
        .merge(auth_routes(&state))
        .layer(middleware::from_fn_with_state(state.clone(), session_gate))
        .with_state(state);

    println!("Starting login gate server on http://localhost:8080");
    println!();
    println!("Endpoints:");
    println!("  GET  /                   - public page");
    println!("  GET  /login              - login form");
    println!("  POST /login              - submit credentials (sets session cookie)");
    println!("  POST /logout             - clear session cookie");
    println!("  GET  /private/dashboard  - requires a valid session");
    println!();
    println!("Test credentials: admin / securepassword");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
    axum::serve(listener, app).await
}

async fn home() -> Html<&'static str> {
    Html(
        "<h1>Welcome</h1>\
         <p>This page is public. <a href=\"/private/dashboard\">Dashboard</a> is not.</p>",
    )
}

#[derive(Debug, Deserialize)]
struct LoginPageParams {
    redirect: Option<String>,
}

async fn login_page(Query(params): Query<LoginPageParams>) -> Html<String> {
    // Only echo the pending redirect back when it looks like a plain local
    // path; everything else renders the form without it.
    let hidden = match params.redirect.as_deref() {
        Some(target)
            if target.starts_with('/')
                && target
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || "/-_.~%".contains(c)) =>
        {
            format!("<input type=\"hidden\" name=\"redirect\" value=\"{target}\">")
        }
        _ => String::new(),
    };

    Html(format!(
        "<h1>Login</h1>\
         <form method=\"post\" action=\"/login\">\
           <input name=\"username\" placeholder=\"username\">\
           <input name=\"password\" type=\"password\" placeholder=\"password\">\
           {hidden}\
           <button type=\"submit\">Sign in</button>\
         </form>",
    ))
}

async fn dashboard(user: CurrentUser) -> Html<String> {
    Html(format!(
        "<h1>Dashboard</h1>\
         <p>Hello, {}.</p>\
         <form method=\"post\" action=\"/logout\"><button>Log out</button></form>",
        user.into_inner().username
    ))
}
