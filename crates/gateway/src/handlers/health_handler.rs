//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of languages visible through the store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies the store answers a read.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Store is readable", body = HealthResponse),
        (status = 503, description = "Store is unavailable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.services.languages().get_all_languages().await {
        Ok(languages) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                languages: Some(languages.len()),
                error: None,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded".to_string(),
                    languages: None,
                    error: Some(e.user_message()),
                }),
            )
                .into_response()
        }
    }
}
