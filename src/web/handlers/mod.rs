pub mod items;
pub mod validate;

use crate::web::state::AppState;
use axum::extract::State;
use axum::response::Json;
use std::sync::Arc;

/// GET /
pub async fn root(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": format!("{} API. See /validate and /api/v1/items", state.config.site.title),
    }))
}
