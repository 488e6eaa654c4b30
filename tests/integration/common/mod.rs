//! Shared fixtures for Gatepass integration tests

use gatepass_token::{RoleDirectory, TokenIssuer};

/// Secret shared between the issuing side and the simulated relying party.
pub const TEST_SECRET: &str = "integration-test-secret-shared-with-relying-party";

/// An issuer over the built-in deployment role table.
pub fn issuer() -> TokenIssuer {
    TokenIssuer::new(TEST_SECRET, RoleDirectory::default())
}
