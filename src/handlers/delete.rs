use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /{key} handler - remove a single key
///
/// Deleting an absent key is a 404; a second delete of the same key reports
/// 404 because the key is already gone.
#[utoipa::path(
    delete,
    path = routes::KEY,
    params(
        ("key" = String, Path, description = "Key to delete, relative to the configured prefix")
    ),
    responses(
        (status = 200, description = "Key deleted"),
        (status = 401, description = "Proxy is view-only", body = String, content_type = "text/plain"),
        (status = 404, description = "Key absent"),
        (status = 500, description = "Store not configured", body = String, content_type = "text/plain")
    ),
    tag = "proxy"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    let store = state.store()?;
    if state.config.view_only {
        return Err(ApiError::ViewOnly);
    }

    if store.delete(&state.effective_key(&key))? {
        tracing::info!("Deleted key: {}", key);
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::KeyNotFound)
    }
}
