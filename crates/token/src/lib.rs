//! Credential token core for Gatepass
//!
//! Issues signed HS256 staff credentials from a (name, category, role)
//! triple and verifies them against the same shared secret. Stateless:
//! every issuance builds a fresh claim set, and the only configuration
//! (signing secret, role table) is read-only after startup.

mod claims;
mod error;
mod issuer;
mod roles;
mod verify;

pub use claims::{Claims, TOKEN_VALIDITY_SECS};
pub use error::{IssueError, RoleTableError, ValidationError, VerifyError};
pub use issuer::TokenIssuer;
pub use roles::{CategoryRoles, RoleDirectory};
