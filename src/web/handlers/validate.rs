use crate::models::{ValidateRequest, ValidateResponse};
use crate::services::{slug, validation};
use crate::web::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::sync::Arc;

/// POST /validate
///
/// Runs validation first; any error aborts before slug generation. On
/// success the trimmed title is normalized and the registry issues a unique
/// slug. Warnings ride along with a successful response and never block.
pub async fn validate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ValidateRequest>,
) -> Response {
    let report = validation::validate(payload.title.as_deref(), payload.description.as_deref());

    if !report.is_valid() {
        tracing::debug!("Validation failed: {:?}", report.errors);
        let body = serde_json::json!({
            "detail": {
                "detail": "Validation failed",
                "errors": report.errors,
            }
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
    }

    let title = payload.title.as_deref().unwrap_or_default();
    let base = slug::normalize(title.trim());
    let issued = state.registry.issue(&base);

    Json(ValidateResponse {
        valid: true,
        slug: Some(issued),
        warnings: if report.warnings.is_empty() {
            None
        } else {
            Some(report.warnings)
        },
    })
    .into_response()
}
