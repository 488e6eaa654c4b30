//! Credential issuance

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::claims::Claims;
use crate::error::{IssueError, ValidationError, VerifyError};
use crate::roles::RoleDirectory;
use crate::verify::verify_token;

/// Issues and verifies signed credential tokens.
///
/// Holds the shared signing secret and the role directory; both are
/// read-only, so the issuer is freely shareable across callers. Issuance
/// retains no state between calls.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    secret: String,
    roles: RoleDirectory,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>, roles: RoleDirectory) -> Self {
        Self {
            secret: secret.into(),
            roles,
        }
    }

    /// The configured role directory.
    pub fn roles(&self) -> &RoleDirectory {
        &self.roles
    }

    /// Issue a signed credential token for the given identity triple.
    ///
    /// The name is trimmed before it is embedded in the claims; an empty
    /// name, an unrecognized category, or a role that is not configured for
    /// the category is rejected before any signing takes place.
    pub fn issue(&self, name: &str, category: &str, role: &str) -> Result<String, IssueError> {
        self.issue_at(name, category, role, Utc::now())
    }

    /// Issue with an explicit issuance instant.
    ///
    /// `issue` delegates here with the current time; tests and replay
    /// tooling use this to pin the `iat`/`exp` pair.
    pub fn issue_at(
        &self,
        name: &str,
        category: &str,
        role: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, IssueError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.roles.check_membership(category, role)?;

        let claims = Claims::new(name, category, role, issued_at);
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(IssueError::Signing)?;

        tracing::debug!(category, role, "issued credential token");
        Ok(token)
    }

    /// Verify a presented token and decode its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, VerifyError> {
        verify_token(token, &self.secret)
    }
}
