/**
 * Error Conversion
 *
 * Render errors implement `IntoResponse`, so handlers can return them
 * directly. The body is JSON:
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 500
 * }
 * ```
 */

use crate::backend::error::types::RenderError;
use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Render failed: {}", message);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        let mut response = (status, Json(body)).into_response();
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        response
    }
}
