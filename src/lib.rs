//! Wikilytics - Main Library
//!
//! Wikilytics is a small search-analytics proxy in front of the Wikipedia API.
//! It forwards search and page-read requests, counts how often each keyword
//! and page is requested, and exposes a ranked "most searched" view plus a
//! token-gated admin summary.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types that carry no server dependency
//!   - Counter records, subject kinds, sort order
//!   - Shared error types
//!
//! - **`backend`** - Axum HTTP server
//!   - Search, read and ranking handlers
//!   - Counter store (SQLite via sqlx)
//!   - Wikipedia client
//!   - Admin login, JWT verification middleware and dashboard
//!
//! # Usage
//!
//! ```rust,no_run
//! use wikilytics::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for validation failures
//! - `backend::error::BackendError` for everything a handler can return;
//!   it converts straight into an HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
