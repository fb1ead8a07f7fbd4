/**
 * Admin Handler Types
 */

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    /// Verified against the configured bcrypt hash
    pub password: String,
}

/// Login response
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginResponse {
    /// JWT token for the `x-auth-token` header (1-hour expiration)
    pub token: String,
}
