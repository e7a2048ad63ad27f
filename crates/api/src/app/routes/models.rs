use axum::{Json, extract::Path, response::IntoResponse};
use serde_json::json;

use shopfront_catalog::ModelName;

/// Branch on a closed-set path label. Membership is checked by the path
/// extractor; anything outside the set never reaches this body.
pub async fn get_model(Path(model_name): Path<ModelName>) -> impl IntoResponse {
    let message = match model_name {
        ModelName::Alexnet => "Deep Learning FTW!",
        ModelName::Lenet => "LeCNN all the images",
        _ => "Have some residuals",
    };

    Json(json!({ "model_name": model_name, "message": message }))
}
