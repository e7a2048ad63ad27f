use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shopfront_core::ValidationErrors;

/// Uniform JSON error envelope: `{"error": code, "message": ...}`.
pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Constraint violations found by an extractor, one entry per failing
/// field. Produced before the handler runs.
pub fn validation_failed(errors: ValidationErrors) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "validation_error",
            "message": errors.to_string(),
            "details": errors.0,
        })),
    )
        .into_response()
}
