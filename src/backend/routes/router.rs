/**
 * Router Configuration
 *
 * Combines the public and admin routes, then adds:
 * - permissive CORS so the browser frontend can call the API
 * - request tracing
 * - a 404 fallback
 */

use axum::{http::StatusCode, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::admin_routes::configure_admin_routes;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());
    let router = configure_admin_routes(router, &app_state);

    router
        .fallback(|| async { BackendError::handler(StatusCode::NOT_FOUND, "Not Found") })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
