//! Hooks into the authentication flow.
//!
//! The login and logout actions and the session gate dispatch an
//! [`AuthEvent`] at each notable outcome. Nothing happens unless the
//! application installs listeners at startup:
//!
//! ```rust,ignore
//! use wicket::register_event_listeners;
//! use wicket::events::listeners::LoggingListener;
//!
//! register_event_listeners(|registry| {
//!     registry.listen(LoggingListener::new());
//! });
//! ```
//!
//! Custom sinks (metrics, alerting, lockout counters) implement
//! [`Listener`]; see its docs for an example.

mod event;
mod listener;
mod registry;

pub mod listeners;

pub use event::AuthEvent;
pub use listener::Listener;
pub use registry::{dispatch, register_event_listeners};
