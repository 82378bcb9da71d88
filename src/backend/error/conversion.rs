/**
 * Error Conversion
 *
 * Converts backend errors into HTTP responses.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "detail": "Error message",
 *   "status": 401
 * }
 * ```
 *
 * 401 responses also carry `WWW-Authenticate: Bearer`.
 */

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("{} {}: {}", status.as_u16(), message, self);
        } else {
            tracing::info!("{} {}", status.as_u16(), message);
        }

        let body = Json(serde_json::json!({
            "detail": message,
            "status": status.as_u16(),
        }));

        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}
