use super::handlers;
use super::state::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/validate", post(handlers::validate::validate))
        .route("/api/v1/items", post(handlers::items::create_item))
        .route("/api/v1/items", get(handlers::items::list_items))
        .route("/api/v1/items/:id", get(handlers::items::get_item))
        .route("/api/v1/items/:id", delete(handlers::items::delete_item))
}
