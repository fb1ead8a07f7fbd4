/**
 * Admin Routes
 *
 * - `POST /admin/login` - Public
 * - `GET /admin/dashboard` - Requires `x-auth-token`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{dashboard, login};
use crate::backend::middleware::admin_auth_middleware;
use crate::backend::server::state::AppState;

/// Add the admin routes to `router`
///
/// Only the dashboard is wrapped by the token middleware.
pub fn configure_admin_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/admin/dashboard", get(dashboard))
        .route_layer(from_fn_with_state(app_state.clone(), admin_auth_middleware));

    router
        .route("/admin/login", post(login))
        .merge(protected)
}
