//! Mapping from toolkit failures to HTTP error responses.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use toolkit::error::ToolkitError;
use tracing::debug;

/// Error returned by route handlers.
///
/// Every variant is a client error: the response is `400` with a JSON body
/// carrying a human-readable `detail` and a stable `code`.
#[derive(Debug)]
pub enum ApiError {
    Operation(ToolkitError),
    /// Missing or malformed query parameters.
    Request(QueryRejection),
}

impl From<ToolkitError> for ApiError {
    fn from(err: ToolkitError) -> Self {
        Self::Operation(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(err: QueryRejection) -> Self {
        Self::Request(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;
        let (code, detail) = match &self {
            Self::Operation(err) => (err.code(), err.to_string()),
            Self::Request(rejection) => ("invalid_request", rejection.body_text()),
        };
        debug!(code, detail = %detail, "rejecting request");

        let body = Json(json!({
            "detail": detail,
            "code": code,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
