//! Credential token errors

/// Rejection of caller-supplied identity fields.
///
/// Recoverable at the boundary: the caller should correct the input and
/// retry. Signing is never attempted for a rejected triple.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("user name must not be empty")]
    EmptyName,

    #[error("unrecognized category '{0}'")]
    UnknownCategory(String),

    #[error("role '{role}' is not configured for category '{category}'")]
    RoleNotInCategory { role: String, category: String },
}

/// Invalid role-table configuration, reported at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleTableError {
    #[error("role table must contain at least one category")]
    Empty,

    #[error("category '{0}' has no roles")]
    EmptyCategory(String),

    #[error("duplicate category '{0}'")]
    DuplicateCategory(String),

    #[error("role table contains a blank category or role name")]
    BlankName,
}

/// Failure to issue a credential token.
#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    /// Caller's fault; re-prompt and retry.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The cryptographic signing step failed. Configuration fault, not
    /// retried.
    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Rejection of a presented credential token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("token signature does not match")]
    BadSignature,

    #[error("token has expired")]
    Expired,

    #[error("malformed token: {0}")]
    Malformed(String),
}
