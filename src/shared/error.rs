//! Shared Error Types
//!
//! Errors that describe bad input independently of the HTTP layer. The
//! backend maps them onto status codes.
//!
//! # Usage
//!
//! ```rust
//! use wikilytics::shared::error::SharedError;
//!
//! let error = SharedError::validation("order", "Use \"asc\" or \"desc\"");
//! ```
use thiserror::Error;

/// Input rejected before it reaches the store or the provider
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A request parameter failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The parameter that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
