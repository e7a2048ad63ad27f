use axum::{
    Router,
    routing::{get, post, put},
};

pub mod geometry;
pub mod items;
pub mod models;
pub mod system;
pub mod updates;
pub mod users;
pub mod weights;

/// Full route table.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/items/", get(items::list_items))
        .route(
            "/items/:item_id",
            get(items::read_item).put(updates::update_item),
        )
        // The literal route is registered before its parameterized sibling;
        // `/users/me` must never be captured as a user id.
        .route("/users/me", get(users::read_user_me))
        .route("/users/:user_id", get(users::read_user))
        .route("/models/:model_name", get(models::get_model))
        .route("/detailedItems/:item_id", get(items::read_item_detailed))
        .route("/items3/:item_id", post(items::create_item))
        .route("/items4/", get(items::search_items))
        .route("/items5/:item_id", get(items::read_item_bounded))
        .route("/items6/:item_id", put(updates::update_item_with_importance))
        .route("/items7/:item_id", put(updates::update_item_embedded))
        .route("/items8/:item_id", put(updates::update_item_strict))
        .route("/items9/:item_id", put(updates::update_item_tagged))
        .route("/items10/:item_id", put(updates::update_item_linked))
        .route("/distance/", post(geometry::measure_distance))
        .route("/distance2/", post(geometry::measure_point_distance))
        .route("/index-weights/", post(weights::create_index_weights))
}
