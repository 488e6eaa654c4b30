//! Credential verification

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::claims::Claims;
use crate::error::VerifyError;

/// Verify a token against the shared secret and decode its claims.
///
/// HS256 only; the signature is recomputed over the header and payload
/// segments and compared in constant time inside `jsonwebtoken`. Expiry is
/// checked with zero leeway, so `now > exp` rejects and `now == exp` is
/// still accepted.
pub(crate) fn verify_token(token: &str, secret: &str) -> Result<Claims, VerifyError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_aud = false;

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "token verification failed");
        match e.kind() {
            ErrorKind::ExpiredSignature => VerifyError::Expired,
            ErrorKind::InvalidSignature => VerifyError::BadSignature,
            // Bad base64, bad JSON, wrong segment count, missing exp, or a
            // header that declares anything but HS256.
            _ => VerifyError::Malformed(e.to_string()),
        }
    })?;

    Ok(token_data.claims)
}
