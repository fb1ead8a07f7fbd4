//! Server Module
//!
//! Server-side setup: configuration, application state and app creation.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration
//! └── init.rs         - Store/provider setup and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **State Creation**: store, provider, token keys, admin credentials
//! 3. **Router Creation**: routes and middleware
//!
//! # Example
//!
//! ```rust,no_run
//! use wikilytics::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(&ServerConfig::from_env()?).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, create_state, InitError};
pub use state::AppState;
