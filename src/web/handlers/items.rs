use crate::models::{Item, ItemCreate};
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::sync::Arc;

fn not_found(msg: &str) -> Response {
    let body = serde_json::json!({
        "error": "Not Found",
        "message": msg,
    });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// POST /api/v1/items
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ItemCreate>,
) -> Response {
    let item = state.items.create(payload);
    (StatusCode::CREATED, Json(item)).into_response()
}

/// GET /api/v1/items
pub async fn list_items(State(state): State<Arc<AppState>>) -> Json<Vec<Item>> {
    Json(state.items.list())
}

/// GET /api/v1/items/:id
pub async fn get_item(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Response {
    match state.items.get(id) {
        Some(item) => Json(item).into_response(),
        None => not_found("Item not found"),
    }
}

/// DELETE /api/v1/items/:id
pub async fn delete_item(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Response {
    if state.items.delete(id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found("Item not found")
    }
}
