/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Raised directly by handlers and middleware with an explicit status:
 * - Missing search term (400)
 * - Missing admin token (401), invalid admin token (400)
 * - Page not found (404)
 * - Wrong admin credentials (401)
 * - Missing or undecodable JSON body (400)
 *
 * ## Internal Errors
 *
 * Store, provider, token-signing and password-hash failures. They all map to
 * 500 and hide their details from the client.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::provider::ProviderError;
use crate::shared::SharedError;

/// Message sent to clients for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use wikilytics::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Page not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g., missing header)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Rejected request parameter
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Counter store failure
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Wikipedia request failed or returned something unusable
    #[error("Provider error: {0}")]
    ProviderError(#[from] ProviderError),

    /// Token signing failure
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// Password hash verification failure
    #[error("Credential error: {0}")]
    CredentialError(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// 401 for a request without an admin token
    pub fn missing_token() -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, "No token, authorization denied")
    }

    /// 400 for an expired, malformed or tampered admin token
    pub fn invalid_token() -> Self {
        Self::handler(StatusCode::BAD_REQUEST, "Token is not valid")
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError::ValidationError` - 400 Bad Request
    /// - Everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::DatabaseError(_)
            | Self::ProviderError(_)
            | Self::TokenError(_)
            | Self::CredentialError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is an internal failure hidden from clients
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Get the client-facing error message
    ///
    /// Internal errors collapse to a generic message.
    pub fn message(&self) -> String {
        if self.is_internal() {
            return INTERNAL_ERROR_MESSAGE.to_string();
        }
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(SharedError::ValidationError { message, .. }) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// A JSON body axum could not extract becomes a 400 with our error shape
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}
