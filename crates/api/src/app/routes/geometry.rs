use axum::{Json, response::IntoResponse};

use shopfront_catalog::distance;

use crate::app::dto;

/// Euclidean distance between two tuple-form coordinates, returned as a
/// bare JSON number.
pub async fn measure_distance(Json(body): Json<dto::CoordinatePair>) -> impl IntoResponse {
    Json(distance(body.loc1, body.loc2))
}

/// Same contract over record-form coordinates.
pub async fn measure_point_distance(Json(body): Json<dto::PointPair>) -> impl IntoResponse {
    Json(body.loc1.distance_to(&body.loc2))
}
