//! Credential lifecycle integration tests
//!
//! Exercises the full path an operator deployment takes: environment
//! configuration through the composition root, issuance, and verification
//! by an independent relying party holding the same secret.

use gatepass_app::{create_issuer, Config};
use gatepass_token::{IssueError, RoleDirectory, TokenIssuer, ValidationError, VerifyError};
use serial_test::serial;

mod common;
use common::{issuer, TEST_SECRET};

#[test]
#[serial]
fn test_issue_and_verify_through_composition_root() {
    std::env::set_var("GATEPASS_SIGNING_SECRET", TEST_SECRET);
    std::env::remove_var("GATEPASS_ROLES_FILE");

    let config = Config::from_env().unwrap();
    let issuer = create_issuer(&config).unwrap();

    let token = issuer
        .issue("Priya Raman", "Central Command", "Director of Finance")
        .unwrap();

    let claims = issuer.verify(&token).unwrap();
    assert_eq!(claims.name, "Priya Raman");
    assert_eq!(claims.category, "Central Command");
    assert_eq!(claims.role, "Director of Finance");

    std::env::remove_var("GATEPASS_SIGNING_SECRET");
}

#[test]
fn test_relying_party_with_shared_secret_accepts_token() {
    // The relying party is a separate process with its own issuer instance;
    // only the secret is shared.
    let issuing_side = issuer();
    let relying_party = TokenIssuer::new(TEST_SECRET, RoleDirectory::default());

    let token = issuing_side
        .issue("Alice", "Field Units", "Station Controller")
        .unwrap();

    let claims = relying_party.verify(&token).unwrap();
    assert_eq!(claims.name, "Alice");
    assert_eq!(claims.role, "Station Controller");
}

#[test]
fn test_relying_party_with_different_secret_rejects_token() {
    let issuing_side = issuer();
    let relying_party = TokenIssuer::new("not-the-shared-secret", RoleDirectory::default());

    let token = issuing_side
        .issue("Alice", "Field Units", "Station Controller")
        .unwrap();

    assert_eq!(
        relying_party.verify(&token),
        Err(VerifyError::BadSignature),
        "a relying party without the shared secret must reject the token"
    );
}

#[test]
fn test_reissuing_at_a_later_time_yields_an_independent_token() {
    let issuer = issuer();
    let now = chrono::Utc::now();

    let first = issuer
        .issue_at("Alice", "Central Command", "Managing Director", now)
        .unwrap();
    let second = issuer
        .issue_at(
            "Alice",
            "Central Command",
            "Managing Director",
            now + chrono::Duration::minutes(5),
        )
        .unwrap();

    assert_ne!(first, second, "a fresh issuance must produce a new token");
    assert!(issuer.verify(&first).is_ok());
    assert!(issuer.verify(&second).is_ok());
}

#[test]
fn test_validation_failures_reach_the_operator_boundary() {
    let issuer = issuer();

    let empty_name = issuer.issue("", "Central Command", "Director of Finance");
    assert!(matches!(
        empty_name,
        Err(IssueError::Validation(ValidationError::EmptyName))
    ));

    let unknown_category = issuer.issue("Alice", "Unknown Dept", "X");
    assert!(matches!(
        unknown_category,
        Err(IssueError::Validation(ValidationError::UnknownCategory(_)))
    ));
}
