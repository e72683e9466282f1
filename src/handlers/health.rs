use crate::error::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /health handler - report whether this process has a backing store
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Store configured", body = HealthResponse),
        (status = 503, description = "Store not configured", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Response {
    if state.store.is_some() {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
            }),
        )
            .into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(UnhealthyResponse {
                status: "unhealthy".to_string(),
                error: "Database is not configured".to_string(),
            }),
        )
            .into_response()
    }
}
