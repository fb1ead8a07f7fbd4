/**
 * Admin Session Tokens
 *
 * HS256 JWTs carrying the admin identity. Tokens live for one hour.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token lifetime in seconds
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// The identity a token grants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub id: i64,
    pub username: String,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Admin ID
    pub sub: String,
    /// Admin identity
    pub admin: AdminIdentity,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing and verification keys derived from one shared secret
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenKeys").finish_non_exhaustive()
    }
}

fn now_secs() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

impl TokenKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Create a token for `admin` valid for [`TOKEN_TTL_SECS`] from now
    pub fn issue(&self, admin: &AdminIdentity) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(admin, now_secs())
    }

    /// Create a token as if issued at `issued_at` (Unix seconds)
    pub fn issue_at(
        &self,
        admin: &AdminIdentity,
        issued_at: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: admin.id.to_string(),
            admin: admin.clone(),
            exp: issued_at + TOKEN_TTL_SECS,
            iat: issued_at,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}
