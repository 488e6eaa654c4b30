//! Credential claim types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed credential lifetime: 30 days, in seconds.
pub const TOKEN_VALIDITY_SECS: i64 = 30 * 86_400;

/// Claim set embedded in a credential token.
///
/// Field names are the wire format; any relying party holding the shared
/// secret decodes exactly these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Staff member's display name
    pub name: String,
    /// Role within the category
    pub role: String,
    /// Organizational category
    pub category: String,
    /// Issued at (seconds since epoch, UTC)
    pub iat: i64,
    /// Expires at (seconds since epoch, UTC)
    pub exp: i64,
}

impl Claims {
    /// Build a fresh claim set for the given issuance instant.
    ///
    /// `exp` is always `iat + TOKEN_VALIDITY_SECS`; the pair is never set
    /// independently.
    pub fn new(name: &str, category: &str, role: &str, issued_at: DateTime<Utc>) -> Self {
        let iat = issued_at.timestamp();
        Self {
            name: name.to_string(),
            role: role.to_string(),
            category: category.to_string(),
            iat,
            exp: iat + TOKEN_VALIDITY_SECS,
        }
    }

    /// Issuance instant, if `iat` is representable.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    /// Expiry instant, if `exp` is representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
