//! Authentication Module
//!
//! Admin authentication for the dashboard endpoint.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── credentials.rs  - Admin username and bcrypt hash
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── login.rs    - POST /admin/login
//!     └── dashboard.rs - GET /admin/dashboard
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: admin posts username and password → bcrypt check → JWT (1 hour)
//! 2. **Dashboard**: client sends the JWT in `x-auth-token` → middleware
//!    verifies it → handler returns the top 5 counters
//!
//! # Security
//!
//! - The admin password is only ever stored as a bcrypt hash
//! - Wrong credentials return 401 without saying which part was wrong
//! - A missing token is 401, a bad or expired token is 400

/// Admin credential check
pub mod credentials;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for admin endpoints
pub mod handlers;

pub use credentials::AdminCredentials;
pub use handlers::types::{LoginRequest, LoginResponse};
pub use handlers::{dashboard, login};
pub use sessions::{AdminIdentity, Claims, TokenKeys};
