/**
 * Server Configuration
 *
 * Configuration is read from environment variables (a `.env` file is
 * loaded by the binary first), with defaults for local development.
 *
 * | Variable              | Default                                 |
 * |-----------------------|-----------------------------------------|
 * | `PORT`                | 5000                                    |
 * | `DATABASE_URL`        | `sqlite://searched_data.db?mode=rwc`    |
 * | `WIKIPEDIA_API_URL`   | `https://en.wikipedia.org/w/api.php`    |
 * | `JWT_SECRET`          | development secret (warning logged)     |
 * | `ADMIN_USERNAME`      | `admin`                                 |
 * | `ADMIN_PASSWORD_HASH` | unset                                   |
 * | `ADMIN_PASSWORD`      | unset, hashed at startup when used      |
 */

use std::fmt;

use thiserror::Error;

use crate::backend::analytics::db::DEFAULT_DATABASE_URL;
use crate::backend::provider::DEFAULT_WIKIPEDIA_API_URL;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5000;

/// Username used when `ADMIN_USERNAME` is not set
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

const DEVELOPMENT_JWT_SECRET: &str = "defaultSecretKey";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
    #[error("failed to hash ADMIN_PASSWORD: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

/// Where the admin password comes from
#[derive(Clone, PartialEq, Eq)]
pub enum AdminPassword {
    /// A bcrypt hash supplied directly
    Hash(String),
    /// A plaintext password, hashed once when the app is created
    Plain(String),
    /// Login disabled
    Unset,
}

impl fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash(_) => f.write_str("Hash(<redacted>)"),
            Self::Plain(_) => f.write_str("Plain(<redacted>)"),
            Self::Unset => f.write_str("Unset"),
        }
    }
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub wikipedia_api_url: String,
    pub jwt_secret: String,
    pub admin_username: String,
    pub admin_password: AdminPassword,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url)
            .field("wikipedia_api_url", &self.wikipedia_api_url)
            .field("jwt_secret", &"<redacted>")
            .field("admin_username", &self.admin_username)
            .field("admin_password", &self.admin_password)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            wikipedia_api_url: DEFAULT_WIKIPEDIA_API_URL.to_string(),
            jwt_secret: DEVELOPMENT_JWT_SECRET.to_string(),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: AdminPassword::Unset,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: "PORT",
                reason: e.to_string(),
            })?,
            None => defaults.port,
        };

        let jwt_secret = var("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set. Using the development secret.");
            defaults.jwt_secret.clone()
        });

        let admin_password = match (var("ADMIN_PASSWORD_HASH"), var("ADMIN_PASSWORD")) {
            (Some(hash), _) => AdminPassword::Hash(hash),
            (None, Some(plain)) => AdminPassword::Plain(plain),
            (None, None) => {
                tracing::warn!("No admin password configured. Admin login is disabled.");
                AdminPassword::Unset
            }
        };

        Ok(Self {
            port,
            database_url: var("DATABASE_URL").unwrap_or(defaults.database_url),
            wikipedia_api_url: var("WIKIPEDIA_API_URL").unwrap_or(defaults.wikipedia_api_url),
            jwt_secret,
            admin_username: var("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password,
        })
    }
}
