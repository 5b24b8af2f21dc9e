/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, so handlers return
 * `Result<_, BackendError>` and the error is turned into a status code and a
 * JSON envelope here.
 *
 * # Response Format
 *
 * ```json
 * { "error": "Item not found" }
 * ```
 *
 * Server errors are logged with their full detail before the sanitized
 * envelope is sent; client errors are logged at `warn`.
 */

use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Request failed: {:?}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "Request rejected: {}", self);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
