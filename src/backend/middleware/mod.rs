//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - `x-auth-token` verification for admin routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use wikilytics::backend::middleware::admin_auth_middleware;
//!
//! let admin = Router::new()
//!     .route("/admin/dashboard", get(dashboard))
//!     .route_layer(from_fn_with_state(app_state.clone(), admin_auth_middleware));
//! ```

pub mod auth;

pub use auth::{admin_auth_middleware, AdminUser, AuthenticatedAdmin, AUTH_TOKEN_HEADER};
