/**
 * Admin Credentials
 *
 * The single admin account: a username and a bcrypt password hash.
 * Without a hash, login is disabled.
 */

use std::fmt;

use crate::backend::auth::sessions::AdminIdentity;
use crate::backend::server::config::{AdminPassword, ConfigError};

/// ID carried in every admin token
pub const ADMIN_ID: i64 = 1;

#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: Option<String>,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password_hash: Option<String>) -> Self {
        Self {
            username: username.into(),
            password_hash,
        }
    }

    /// Build credentials from configuration, hashing a plaintext password
    ///
    /// A preset hash must parse as bcrypt.
    pub fn from_config(username: &str, password: &AdminPassword) -> Result<Self, ConfigError> {
        let password_hash = match password {
            AdminPassword::Hash(hash) => {
                hash.parse::<bcrypt::HashParts>()
                    .map_err(|err| ConfigError::InvalidValue {
                        name: "ADMIN_PASSWORD_HASH",
                        reason: err.to_string(),
                    })?;
                Some(hash.clone())
            }
            AdminPassword::Plain(plain) => Some(bcrypt::hash(plain, bcrypt::DEFAULT_COST)?),
            AdminPassword::Unset => None,
        };
        Ok(Self::new(username, password_hash))
    }

    pub fn is_configured(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Check a username/password pair
    ///
    /// bcrypt runs before the username comparison, whatever the username.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, bcrypt::BcryptError> {
        let Some(hash) = &self.password_hash else {
            return Ok(false);
        };
        let password_ok = bcrypt::verify(password, hash)?;
        Ok(password_ok && username == self.username)
    }

    pub fn identity(&self) -> AdminIdentity {
        AdminIdentity {
            id: ADMIN_ID,
            username: self.username.clone(),
        }
    }
}
