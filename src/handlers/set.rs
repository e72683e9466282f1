use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::{Form, extract::State, http::StatusCode};

/// POST / handler - write form-encoded key=value pairs into the store
///
/// Every pair is written under the configured prefix, overwriting existing
/// values. Writes are per-key; if the store fails mid-iteration the handler
/// aborts and reports 500, leaving earlier writes applied.
///
/// The `Form` extractor runs before the handler body, so a POST without a
/// form content-type is rejected with 415 ahead of the configured and
/// view-only checks; the precondition order below applies to well-formed
/// form requests.
#[utoipa::path(
    post,
    path = routes::ROOT,
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "Zero or more key=value pairs"
    ),
    responses(
        (status = 200, description = "All pairs stored"),
        (status = 401, description = "Proxy is view-only", body = String, content_type = "text/plain"),
        (status = 500, description = "Store not configured", body = String, content_type = "text/plain")
    ),
    tag = "proxy"
)]
pub async fn set_handler(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<StatusCode, ApiError> {
    let store = state.store()?;
    if state.config.view_only {
        return Err(ApiError::ViewOnly);
    }

    for (key, value) in &pairs {
        store.set(&state.effective_key(key), value)?;
    }

    tracing::info!("Stored {} keys", pairs.len());
    Ok(StatusCode::OK)
}
