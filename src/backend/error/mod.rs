//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Tiers
//!
//! - **Client errors** - bad order parameter, missing search term, missing or
//!   invalid admin token, missing page. Returned as 400/401/404 with a short
//!   message.
//! - **Internal errors** - store or provider failures. Logged with full detail
//!   and returned as a generic 500.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
