/**
 * Application State Management
 *
 * `AppState` holds every process-wide dependency: the counter store, the
 * Wikipedia client and the admin auth settings. It is built once by
 * `create_app` and passed to handlers; nothing is reached through globals.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers ask for just the part they
 * need:
 *
 * ```rust,ignore
 * async fn handler(State(store): State<CounterStore>) { /* ... */ }
 * ```
 */

use axum::extract::FromRef;

use crate::backend::analytics::db::CounterStore;
use crate::backend::auth::credentials::AdminCredentials;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::provider::WikipediaClient;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Counter table
    pub store: CounterStore,

    /// External search/content provider
    pub provider: WikipediaClient,

    /// JWT signing and verification keys
    pub token_keys: TokenKeys,

    /// Admin account used by `/admin/login`
    pub admin_credentials: AdminCredentials,
}

impl FromRef<AppState> for CounterStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for WikipediaClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.provider.clone()
    }
}

impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_keys.clone()
    }
}

impl FromRef<AppState> for AdminCredentials {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.admin_credentials.clone()
    }
}
