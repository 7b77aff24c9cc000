//! Signed session token encoding and verification.
//!
//! A token is `base64(payload JSON) "." base64(HMAC-SHA256 signature)`, with
//! the signature computed over the encoded payload segment. Verification
//! checks the signature before the payload is decoded, so unauthenticated
//! input never reaches the JSON parser.

use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::crypto::constant_time_eq;
use crate::{AuthError, SecretString};

use super::SessionPayload;

type HmacSha256 = Hmac<Sha256>;

/// Creates a signed session token for `username`, valid for `ttl_seconds`
/// from the current wall clock.
///
/// # Errors
///
/// Returns `AuthError::ConfigurationError` if `ttl_seconds` is not positive
/// or the expiry does not fit in an epoch timestamp.
pub fn create_token(
    username: &str,
    secret: &SecretString,
    ttl_seconds: i64,
) -> Result<String, AuthError> {
    create_token_at(username, secret, ttl_seconds, Utc::now().timestamp())
}

/// Creates a signed session token issued at `now` (epoch seconds).
///
/// Token creation is deterministic for fixed inputs, which keeps expiry
/// behavior testable without touching the wall clock.
///
/// # Errors
///
/// Returns `AuthError::ConfigurationError` if `ttl_seconds` is not positive
/// or the expiry does not fit in an epoch timestamp.
pub fn create_token_at(
    username: &str,
    secret: &SecretString,
    ttl_seconds: i64,
    now: i64,
) -> Result<String, AuthError> {
    if ttl_seconds <= 0 {
        return Err(AuthError::ConfigurationError(
            "session ttl must be positive".to_owned(),
        ));
    }

    let Some(expires_at) = now.checked_add(ttl_seconds) else {
        return Err(AuthError::ConfigurationError(
            "session expiry overflows the timestamp range".to_owned(),
        ));
    };

    let payload = SessionPayload {
        username: username.to_owned(),
        issued_at: now,
        expires_at,
    };

    let json = serde_json::to_vec(&payload).map_err(|_| AuthError::TokenInvalid)?;
    let payload_b64 = general_purpose::STANDARD.encode(json);
    let signature_b64 =
        general_purpose::STANDARD.encode(compute_hmac(payload_b64.as_bytes(), secret));

    Ok(format!("{}.{}", payload_b64, signature_b64))
}

/// Verifies a session token against the current wall clock.
///
/// Returns `None` for any invalid token: bad signature, malformed segments,
/// or natural expiry. Callers cannot distinguish the cause.
pub fn verify_token(token: &str, secret: &SecretString) -> Option<SessionPayload> {
    verify_token_at(token, secret, Utc::now().timestamp())
}

/// Verifies a session token as of `now` (epoch seconds).
///
/// A token whose expiry equals `now` is already expired.
pub fn verify_token_at(token: &str, secret: &SecretString, now: i64) -> Option<SessionPayload> {
    // Split on the first separator; the payload segment never contains one.
    let (payload_b64, signature_b64) = token.split_once('.')?;

    let supplied_sig = general_purpose::STANDARD.decode(signature_b64).ok()?;
    let expected_sig = compute_hmac(payload_b64.as_bytes(), secret);

    if !constant_time_eq(&expected_sig, &supplied_sig) {
        log::warn!(
            target: "wicket::session",
            "msg=\"session token signature mismatch\" token_prefix=\"{}...\"",
            &token.chars().take(8).collect::<String>()
        );
        return None;
    }

    let json = general_purpose::STANDARD.decode(payload_b64).ok()?;
    let payload: SessionPayload = serde_json::from_slice(&json).ok()?;

    if payload.is_expired_at(now) {
        log::debug!(target: "wicket::session", "msg=\"session token expired\"");
        return None;
    }

    Some(payload)
}

/// Computes HMAC-SHA256 over `message` keyed by the session secret.
///
/// # Panics
///
/// This function cannot panic as HMAC accepts keys of any size.
fn compute_hmac(message: &[u8], secret: &SecretString) -> Vec<u8> {
    // SAFETY: HmacSha256::new_from_slice only fails if the key is invalid,
    // but HMAC-SHA256 accepts keys of any length, so this cannot fail.
    #[allow(clippy::expect_used)]
    let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
        .expect("HMAC accepts keys of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}
