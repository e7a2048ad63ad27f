//! PUT handlers demonstrating the body-parameter contracts: multiple body
//! records, body-forced scalars, embedded wrappers, and recursively
//! validated nested records. Each returns its inputs merged verbatim.

use axum::{
    Json,
    extract::Path,
    response::IntoResponse,
};
use serde_json::json;

use shopfront_catalog::{ItemId, LinkedItem, TaggedItem};

use crate::app::dto;
use crate::app::extract::ValidatedJson;

/// Bounded path id plus two body records, the second optional.
pub async fn update_item(
    Path(item_id): Path<ItemId>,
    Json(body): Json<dto::ItemAndUser>,
) -> impl IntoResponse {
    Json(json!({ "item_id": item_id, "item": body.item, "user": body.user }))
}

/// A scalar (`importance`) carried in the body alongside the records.
pub async fn update_item_with_importance(
    Path(item_id): Path<ItemId>,
    Json(body): Json<dto::ItemUserImportance>,
) -> impl IntoResponse {
    Json(json!({
        "item_id": item_id,
        "item": body.item,
        "user": body.user,
        "importance": body.importance,
    }))
}

/// The lone body record still arrives wrapped under its own field name.
pub async fn update_item_embedded(
    Path(item_id): Path<i64>,
    Json(body): Json<dto::EmbeddedItem>,
) -> impl IntoResponse {
    Json(json!({ "item_id": item_id, "item": body.item }))
}

/// Embedded wrapper around the constrained item variant; the extractor
/// enforces the description and price constraints.
pub async fn update_item_strict(
    Path(item_id): Path<i64>,
    ValidatedJson(body): ValidatedJson<dto::EmbeddedStrictItem>,
) -> impl IntoResponse {
    Json(json!({ "item_id": item_id, "item": body.item }))
}

/// Item with a tag set and an optional nested image.
pub async fn update_item_tagged(
    Path(item_id): Path<i64>,
    Json(item): Json<TaggedItem>,
) -> impl IntoResponse {
    Json(json!({ "item_id": item_id, "item": item }))
}

/// Like [`update_item_tagged`] but the nested image URL must be
/// well-formed; a malformed value fails the whole request during
/// deserialization.
pub async fn update_item_linked(
    Path(item_id): Path<i64>,
    Json(item): Json<LinkedItem>,
) -> impl IntoResponse {
    Json(json!({ "item_id": item_id, "item": item }))
}
