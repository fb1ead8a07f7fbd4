/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers return
 * `Result<_, BackendError>` and the error becomes a JSON response:
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * Internal errors are logged here with their full detail before the
 * generic message goes out.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Rejected request ({}): {}", status, self);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
