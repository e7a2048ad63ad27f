use axum::{Json, http::StatusCode, response::IntoResponse};

use shopfront_catalog::IndexWeights;

use crate::app::errors;

/// Whole-body integer-keyed mapping; respond with the weight registered
/// under key 1. The key domain is enforced by the `IndexWeights`
/// deserializer; a missing key 1 is reported as a structured client error
/// rather than a lookup panic.
pub async fn create_index_weights(Json(weights): Json<IndexWeights>) -> axum::response::Response {
    match weights.get(1) {
        Some(weight) => Json(weight).into_response(),
        None => errors::json_error(
            StatusCode::BAD_REQUEST,
            "missing_weight",
            "no weight registered under key 1",
        ),
    }
}
