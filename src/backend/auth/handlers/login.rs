/**
 * Login Handler
 *
 * POST /admin/login
 *
 * # Authentication Process
 *
 * 1. Refuse with 503 if no admin password is configured
 * 2. Verify username and password (bcrypt)
 * 3. Return a JWT valid for one hour
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::credentials::AdminCredentials;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing or malformed JSON body
/// * `401 Unauthorized` - wrong username or password
/// * `503 Service Unavailable` - admin login is not configured
/// * `500 Internal Server Error` - hash verification or token signing failed
///
/// # Example Request
///
/// ```http
/// POST /admin/login HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "admin", "password": "correct horse battery staple" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(credentials): State<AdminCredentials>,
    State(keys): State<TokenKeys>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let Json(request) = payload?;

    if !credentials.is_configured() {
        tracing::error!("Admin login attempted but no admin password is configured");
        return Err(BackendError::handler(
            StatusCode::SERVICE_UNAVAILABLE,
            "Admin login is not configured",
        ));
    }

    if !credentials.verify(&request.username, &request.password)? {
        tracing::warn!("Invalid admin credentials for: {}", request.username);
        return Err(BackendError::handler(StatusCode::UNAUTHORIZED, "Invalid credentials"));
    }

    let token = keys.issue(&credentials.identity())?;
    tracing::info!("Admin logged in: {}", request.username);

    Ok(Json(LoginResponse { token }))
}
