//! Gatepass application composition root
//!
//! Wires environment configuration into a ready-to-use token issuer.

use anyhow::Result;
use gatepass_token::TokenIssuer;

pub mod config;

pub use config::Config;

/// Build the credential issuer from loaded configuration.
pub fn create_issuer(config: &Config) -> Result<TokenIssuer> {
    let roles = config.load_role_directory()?;
    Ok(TokenIssuer::new(config.signing_secret.clone(), roles))
}
