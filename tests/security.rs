//! Security-focused test suite.
//!
//! Exercises the crate's security properties end to end: salted password
//! records, tamper-proof session tokens, strict expiry, uniform failures and
//! redaction. Runs with no extra features: `cargo test --test security`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use base64::{engine::general_purpose, Engine as _};
use chrono::Duration;
use wicket::crypto::{constant_time_eq, PasswordHasher, Pbkdf2Hasher};
use wicket::session::{create_token_at, verify_token_at, SessionConfig};
use wicket::{
    AuthConfig, AuthGate, Credentials, GateConfig, GateDecision, SecretString,
};

fn secret() -> SecretString {
    SecretString::new("test-secret-key-that-is-long-enough!")
}

// =============================================================================
// Password Record Tests
// =============================================================================

#[test]
fn records_for_the_same_password_differ() {
    let hasher = Pbkdf2Hasher::default();

    let record1 = hasher.hash("testpassword123").unwrap();
    let record2 = hasher.hash("testpassword123").unwrap();

    // Same password must produce different records due to random salt
    assert_ne!(record1, record2);

    // But both must verify correctly
    assert!(hasher.verify("testpassword123", &record1).unwrap());
    assert!(hasher.verify("testpassword123", &record2).unwrap());
}

#[test]
fn wrong_password_fails_verification() {
    let hasher = Pbkdf2Hasher::default();
    let record = hasher.hash("correctpassword").unwrap();

    assert!(!hasher.verify("wrongpassword", &record).unwrap());
}

#[test]
fn malformed_records_fail_closed() {
    let hasher = Pbkdf2Hasher::default();

    for record in ["", "nocolon", "a:b:c:d", "!!!:AAAA", "AAAA:!!!"] {
        let result = hasher.verify("anypassword", record);
        // Never an error, never a pass
        assert_eq!(result, Ok(false), "record {record:?}");
    }
}

#[test]
fn records_do_not_contain_the_password() {
    let hasher = Pbkdf2Hasher::default();
    let record = hasher.hash("visible-marker-password").unwrap();

    assert!(!record.contains("visible-marker-password"));
}

// =============================================================================
// Session Token Tests
// =============================================================================

#[test]
fn token_round_trip_preserves_claims() {
    let token = create_token_at("alice", &secret(), 3_600, 1_000_000).unwrap();
    let payload = verify_token_at(&token, &secret(), 1_000_001).unwrap();

    assert_eq!(payload.username, "alice");
    assert_eq!(payload.issued_at, 1_000_000);
    assert_eq!(payload.expires_at, 1_003_600);
}

#[test]
fn token_expiry_boundary_is_exclusive() {
    let token = create_token_at("alice", &secret(), 3_600, 1_000_000).unwrap();

    assert!(verify_token_at(&token, &secret(), 1_003_599).is_some());
    assert!(verify_token_at(&token, &secret(), 1_003_600).is_none());
}

#[test]
fn forged_payload_with_real_signature_is_rejected() {
    let token = create_token_at("alice", &secret(), 3_600, 1_000_000).unwrap();
    let (_, signature) = token.split_once('.').unwrap();

    // Claim to be another user with a far-future expiry
    let forged_payload = general_purpose::STANDARD
        .encode(r#"{"username":"mallory","iat":1000000,"exp":9999999999}"#);

    let forged = format!("{forged_payload}.{signature}");
    assert!(verify_token_at(&forged, &secret(), 1_000_001).is_none());
}

#[test]
fn token_signed_with_another_secret_is_rejected() {
    let other = SecretString::new("another-secret-key-that-is-long-enough");
    let token = create_token_at("alice", &other, 3_600, 1_000_000).unwrap();

    assert!(verify_token_at(&token, &secret(), 1_000_001).is_none());
}

#[test]
fn flipping_any_single_bit_invalidates_the_token() {
    let token = create_token_at("alice", &secret(), 3_600, 1_000_000).unwrap();

    let mut mutations = 0;
    for index in 0..token.len() {
        for bit in 0..8 {
            let mut bytes = token.clone().into_bytes();
            bytes[index] ^= 1 << bit;
            // Mutations that stop being UTF-8 cannot arrive as a &str
            let Ok(mutated) = String::from_utf8(bytes) else {
                continue;
            };

            assert_eq!(
                verify_token_at(&mutated, &secret(), 1_000_001),
                None,
                "bit {bit} of byte {index} went unnoticed"
            );
            mutations += 1;
        }
    }

    // The sweep reaches both segments and the separator, including the
    // trailing bits of the final base64 signature character
    assert!(mutations > 500, "only {mutations} mutations checked");
}

#[test]
fn tampering_and_expiry_are_indistinguishable() {
    let expired = create_token_at("alice", &secret(), 60, 1_000_000).unwrap();
    let mut tampered = create_token_at("alice", &secret(), 3_600, 1_000_000).unwrap();
    tampered.push('x');

    // Both collapse to the same outcome: no payload
    assert_eq!(verify_token_at(&expired, &secret(), 1_000_100), None);
    assert_eq!(verify_token_at(&tampered, &secret(), 1_000_100), None);
}

#[test]
fn comparison_helper_is_length_and_content_strict() {
    assert!(constant_time_eq(b"same bytes", b"same bytes"));
    assert!(!constant_time_eq(b"same bytes", b"same byteZ"));
    assert!(!constant_time_eq(b"short", b"longer input"));
}

// =============================================================================
// Gate Tests
// =============================================================================

fn gate() -> AuthGate {
    AuthGate::new(GateConfig::default(), secret())
}

#[test]
fn gate_redirects_protected_request_without_session() {
    let decision = gate().decide_at("/private/dashboard", None, 1_000_000);

    assert_eq!(
        decision,
        GateDecision::Redirect("/login?redirect=%2Fprivate%2Fdashboard".to_owned())
    );
}

#[test]
fn gate_allows_valid_session() {
    let token = create_token_at("alice", &secret(), 3_600, 1_000_000).unwrap();
    let decision = gate().decide_at("/private/dashboard", Some(&token), 1_000_001);

    match decision {
        GateDecision::Allow(user) => assert_eq!(user.username, "alice"),
        other => panic!("expected Allow, got {other:?}"),
    }
}

#[test]
fn gate_ignores_sessions_on_public_paths() {
    let token = create_token_at("alice", &secret(), 3_600, 1_000_000).unwrap();

    assert_eq!(
        gate().decide_at("/about", Some(&token), 1_000_001),
        GateDecision::Bypass
    );
}

#[test]
fn gate_treats_expired_session_as_absent() {
    let token = create_token_at("alice", &secret(), 60, 1_000_000).unwrap();
    let decision = gate().decide_at("/private/dashboard", Some(&token), 1_000_100);

    assert!(matches!(decision, GateDecision::Redirect(_)));
}

// =============================================================================
// Configuration & Redaction Tests
// =============================================================================

#[test]
fn startup_validation_rejects_mangled_records() {
    let config = AuthConfig::new(
        Credentials {
            username: "alice".to_owned(),
            password_record: "not-a-record".to_owned(),
        },
        SessionConfig {
            secret: secret(),
            ..Default::default()
        },
    );

    assert!(config.validate().is_err());
}

#[test]
fn startup_validation_rejects_weak_secret() {
    let config = AuthConfig::new(
        Credentials {
            username: "alice".to_owned(),
            password_record: Pbkdf2Hasher::default().hash("pw").unwrap(),
        },
        SessionConfig {
            secret: SecretString::new("short"),
            session_ttl: Duration::days(7),
            ..Default::default()
        },
    );

    assert!(config.validate().is_err());
}

#[test]
fn secret_string_redacts_in_debug_and_display() {
    let secret = SecretString::new("my-signing-secret");

    let debug_output = format!("{secret:?}");
    let display_output = format!("{secret}");

    assert!(!debug_output.contains("my-signing-secret"));
    assert!(debug_output.contains("[REDACTED]"));
    assert!(!display_output.contains("my-signing-secret"));
    assert!(display_output.contains("[REDACTED]"));
}
