//! Admin Handlers Module
//!
//! - **`login`** - POST /admin/login - Exchange credentials for a token
//! - **`dashboard`** - GET /admin/dashboard - Top 5 counters (token required)

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Dashboard handler
pub mod dashboard;

pub use dashboard::dashboard;
pub use login::login;
pub use types::{LoginRequest, LoginResponse};
