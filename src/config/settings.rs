//! Application settings loaded from environment variables.

use std::env;

use super::constants::{is_valid_role, DEFAULT_DATABASE_URL, ROLE_USER};
use crate::domain::Role;

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub default_role: Role,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("default_role", &self.default_role)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let default_role = match env::var("DEFAULT_ROLE") {
            Ok(value) if is_valid_role(&value) => Role::from(value.as_str()),
            Ok(value) => {
                tracing::warn!(
                    "DEFAULT_ROLE '{}' is not a known role, falling back to '{}'",
                    value,
                    ROLE_USER
                );
                Role::User
            }
            Err(_) => Role::User,
        };

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            default_role,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            default_role: Role::User,
        }
    }
}
