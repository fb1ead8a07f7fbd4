/**
 * Public API Routes
 *
 * - `GET /search` - Search and record the keyword
 * - `GET /read/{slug}` - Read a page and record the read
 * - `GET /most-searched/{order}` - Ranking view
 */

use axum::{routing::get, Router};

use crate::backend::analytics::{most_searched, read_page, search};
use crate::backend::server::state::AppState;

/// Add the public analytics routes to `router`
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/search", get(search))
        .route("/read/{slug}", get(read_page))
        .route("/most-searched/{order}", get(most_searched))
}
