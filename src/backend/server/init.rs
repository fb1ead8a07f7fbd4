/**
 * Server Initialization
 *
 * Builds the application from a `ServerConfig`:
 * 1. Open the counter store and create its schema
 * 2. Build the Wikipedia client
 * 3. Derive token keys and admin credentials
 * 4. Create the router
 *
 * Unlike optional services elsewhere, the store is required: startup fails
 * if it cannot be opened.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::analytics::db::CounterStore;
use crate::backend::auth::credentials::AdminCredentials;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::provider::{ProviderError, WikipediaClient};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Errors that prevent the server from starting
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to open counter store: {0}")]
    Store(#[from] sqlx::Error),
    #[error("failed to build provider client: {0}")]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Build the application state from configuration
pub async fn create_state(config: &ServerConfig) -> Result<AppState, InitError> {
    tracing::info!("Opening counter store at {}", config.database_url);
    let store = CounterStore::connect(&config.database_url).await?;

    let provider = WikipediaClient::new(&config.wikipedia_api_url)?;
    tracing::info!("Using provider endpoint {}", provider.base_url());

    let admin_credentials =
        AdminCredentials::from_config(&config.admin_username, &config.admin_password)?;

    Ok(AppState {
        store,
        provider,
        token_keys: TokenKeys::from_secret(&config.jwt_secret),
        admin_credentials,
    })
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing Wikilytics backend server");

    let app_state = create_state(config).await?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
