use axum::{
    Json,
    extract::{Path, Query},
    response::IntoResponse,
};
use serde_json::{Value, json};

use shopfront_catalog::{Item, ItemId};

use crate::app::dto;
use crate::app::extract::ValidatedQuery;

/// Read-only fixture standing in for a data source.
const FIXTURE_ITEM_NAMES: [&str; 3] = ["Foo", "Bar", "Baz"];

/// Echo an integer path parameter.
pub async fn read_item(Path(item_id): Path<i64>) -> impl IntoResponse {
    Json(json!({ "item_id": item_id }))
}

/// Slice of the fixture selected by `skip`/`limit`. Standard slicing
/// semantics: out-of-range values truncate, they never error.
pub async fn list_items(Query(range): Query<dto::ListRange>) -> impl IntoResponse {
    let items: Vec<Value> = FIXTURE_ITEM_NAMES
        .iter()
        .skip(range.skip)
        .take(range.limit)
        .map(|name| json!({ "item_name": name }))
        .collect();

    Json(Value::Array(items))
}

/// String path parameter plus a required boolean toggle and an optional
/// amount. The amount appears only when present and non-zero; the long
/// description only when `short` is false.
pub async fn read_item_detailed(
    Path(item_id): Path<String>,
    Query(toggle): Query<dto::DetailToggle>,
) -> impl IntoResponse {
    let mut item = serde_json::Map::new();
    item.insert("item_id".to_string(), json!(item_id));
    if let Some(q) = toggle.q.filter(|q| *q != 0) {
        item.insert("q".to_string(), json!(q));
    }
    if !toggle.short {
        item.insert(
            "description".to_string(),
            json!("This is an amazing product with a long description"),
        );
    }

    Json(Value::Object(item))
}

/// Path, body, and query parameter in one handler. The body fields merge
/// into the response; `price_with_tax` appears when tax is present and
/// non-zero, `q` when present and non-zero.
pub async fn create_item(
    Path(item_id): Path<i64>,
    Query(query): Query<dto::OptionalAmount>,
    Json(item): Json<Item>,
) -> impl IntoResponse {
    let mut result = dto::to_json_object(&item);
    result.insert("item_id".to_string(), json!(item_id));
    if let Some(tax) = item.tax.filter(|t| *t != 0.0) {
        result.insert("price_with_tax".to_string(), json!(item.price + tax));
    }
    if let Some(q) = query.q.filter(|q| *q != 0) {
        result.insert("q".to_string(), json!(q));
    }

    Json(Value::Object(result))
}

/// Constrained optional search string (3–50 chars, uppercase start); the
/// extractor enforces the constraints, the handler only echoes.
pub async fn search_items(
    ValidatedQuery(search): ValidatedQuery<dto::SearchQuery>,
) -> impl IntoResponse {
    let mut results = serde_json::Map::new();
    results.insert(
        "items".to_string(),
        json!([{ "item_id": "Foo" }, { "item_id": "Bar" }]),
    );
    if let Some(q) = search.q {
        results.insert("q".to_string(), json!(q));
    }

    Json(Value::Object(results))
}

/// Bounded path id ((1, 500], enforced at deserialization) plus a required
/// search string.
pub async fn read_item_bounded(
    Path(item_id): Path<ItemId>,
    Query(search): Query<dto::RequiredSearch>,
) -> impl IntoResponse {
    let mut results = serde_json::Map::new();
    results.insert("item_id".to_string(), json!(item_id));
    if !search.q.is_empty() {
        results.insert("q".to_string(), json!(search.q));
    }

    Json(Value::Object(results))
}
