//! Backend Module
//!
//! This module contains all server-side code for Wikilytics: an Axum HTTP
//! server that proxies the Wikipedia API and records usage counters.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`analytics`** - Counter store and the search/read/ranking handlers
//! - **`provider`** - Wikipedia API client
//! - **`auth`** - Admin credentials, JWT tokens, login and dashboard
//! - **`middleware`** - `x-auth-token` verification
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── analytics/      - Counters and public handlers
//! ├── provider/       - Wikipedia client
//! ├── auth/           - Admin authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! client → handler → counter store upsert → Wikipedia → response.
//! The counter write happens before the provider call and is kept even
//! when the provider fails.
//!
//! # State Management
//!
//! `AppState` holds the counter store, the provider client and the admin
//! auth settings. Everything is constructed once at startup and injected
//! into handlers through Axum's `State` extractor.

/// Server initialization and state
pub mod server;

/// Route configuration
pub mod routes;

/// Counter store and analytics handlers
pub mod analytics;

/// External content provider
pub mod provider;

/// Admin authentication
pub mod auth;

/// Request middleware
pub mod middleware;

/// Error types
pub mod error;
