use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Fixed greeting for the root path.
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Hello World" }))
}
