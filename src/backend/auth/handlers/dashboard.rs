/**
 * Dashboard Handler
 *
 * GET /admin/dashboard - the five most observed subjects. The route sits
 * behind `admin_auth_middleware`; `AdminUser` fails with 401 if it is ever
 * mounted without it.
 */
use axum::{extract::State, response::Json};

use crate::backend::analytics::db::CounterStore;
use crate::backend::error::BackendError;
use crate::backend::middleware::AdminUser;
use crate::shared::CounterRecord;

/// Number of records on the dashboard
pub const DASHBOARD_SIZE: i64 = 5;

pub async fn dashboard(
    State(store): State<CounterStore>,
    AdminUser(admin): AdminUser,
) -> Result<Json<Vec<CounterRecord>>, BackendError> {
    let records = store.top(DASHBOARD_SIZE).await?;
    tracing::info!("Dashboard served to {} ({} records)", admin.username, records.len());
    Ok(Json(records))
}
