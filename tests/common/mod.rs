//! Common test utilities and helpers
//!
//! - `app` - Router over an in-memory store and a mocked Wikipedia
//! - `mock_provider` - wiremock responses for the Wikipedia API
//! - `auth_helpers` - Admin credentials and token helpers

#![allow(dead_code, unused_imports)]

pub mod app;
pub mod auth_helpers;
pub mod mock_provider;

pub use app::*;
pub use auth_helpers::*;
pub use mock_provider::*;
