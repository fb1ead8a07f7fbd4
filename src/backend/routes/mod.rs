//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! ├── api_routes.rs   - Public analytics endpoints
//! └── admin_routes.rs - Admin login and dashboard
//! ```
//!
//! # Routes
//!
//! - `GET /search?term=<string>` - Search Wikipedia, count the term
//! - `GET /read/{slug}` - Read a page, count the read
//! - `GET /most-searched/{order}` - All counters by count (`asc`/`desc`)
//! - `POST /admin/login` - Exchange admin credentials for a token
//! - `GET /admin/dashboard` - Top 5 counters (`x-auth-token` required)

/// Main router creation
pub mod router;

/// Public analytics routes
pub mod api_routes;

/// Admin routes
pub mod admin_routes;

pub use router::create_router;
