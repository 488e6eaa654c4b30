//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. The signing secret must be
//! identical to the relying party's; the role table defaults to the
//! built-in deployment table unless a JSON file is configured.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use gatepass_token::{CategoryRoles, RoleDirectory};

#[derive(Debug, Clone)]
pub struct Config {
    /// Shared HS256 signing secret
    pub signing_secret: String,

    /// Optional path to a JSON role-table file
    pub roles_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            signing_secret: env::var("GATEPASS_SIGNING_SECRET")
                .map_err(|_| anyhow::anyhow!("GATEPASS_SIGNING_SECRET is required"))?,

            roles_file: env::var("GATEPASS_ROLES_FILE").ok().map(PathBuf::from),
        };

        Ok(config)
    }

    /// Load the role directory: the configured JSON file, or the built-in
    /// deployment table when no file is set.
    pub fn load_role_directory(&self) -> Result<RoleDirectory> {
        match &self.roles_file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read role table {}", path.display()))?;
                let entries: Vec<CategoryRoles> = serde_json::from_str(&raw)
                    .with_context(|| format!("invalid role table {}", path.display()))?;
                let directory = RoleDirectory::new(entries)
                    .with_context(|| format!("invalid role table {}", path.display()))?;
                Ok(directory)
            }
            None => Ok(RoleDirectory::default()),
        }
    }
}
