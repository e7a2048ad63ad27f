use axum::{Json, extract::Path, response::IntoResponse};
use serde_json::json;

/// Literal sibling of [`read_user`]; must win over the parameterized route.
pub async fn read_user_me() -> impl IntoResponse {
    Json(json!({ "user_id": "the current user" }))
}

pub async fn read_user(Path(user_id): Path<String>) -> impl IntoResponse {
    Json(json!({ "user_id": user_id }))
}
