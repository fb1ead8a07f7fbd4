//! Authentication test helpers

use wikilytics::backend::auth::{AdminCredentials, AdminIdentity, TokenKeys};

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

/// Admin credentials with a cheap bcrypt cost
pub fn test_credentials() -> AdminCredentials {
    let hash = bcrypt::hash(ADMIN_PASSWORD, 4).expect("Failed to hash test password");
    AdminCredentials::new(ADMIN_USERNAME, Some(hash))
}

pub fn test_keys() -> TokenKeys {
    TokenKeys::from_secret(TEST_JWT_SECRET)
}

pub fn test_admin() -> AdminIdentity {
    AdminIdentity {
        id: 1,
        username: ADMIN_USERNAME.to_string(),
    }
}

/// A token whose expiry passed an hour ago
pub fn expired_token() -> String {
    let two_hours_ago = chrono::Utc::now().timestamp() as u64 - 2 * 60 * 60;
    test_keys()
        .issue_at(&test_admin(), two_hours_ago)
        .expect("Failed to create expired token")
}

/// A well-formed token signed with the wrong secret
pub fn forged_token() -> String {
    TokenKeys::from_secret("not-the-server-secret")
        .issue(&test_admin())
        .expect("Failed to create forged token")
}
