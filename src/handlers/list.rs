use crate::encoding::encode_key;
use crate::error::ApiError;
use crate::models::ListQuery;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode};

/// GET / handler - list keys under the configured prefix
///
/// The optional `prefix` query parameter narrows the scan further; it is
/// appended to the configured prefix before asking the store. Returned keys
/// have the configured prefix stripped (never the user filter) and are
/// joined with newlines in store iteration order, no trailing newline.
///
/// With `?encode`, each key is percent-encoded before joining, which keeps
/// keys containing newlines or reserved characters parseable. Without it, a
/// key containing a newline corrupts the joined output.
#[utoipa::path(
    get,
    path = routes::ROOT,
    params(
        ("prefix" = Option<String>, Query, description = "Additional key filter appended to the configured prefix"),
        ("encode" = Option<String>, Query, description = "If present, percent-encode each listed key")
    ),
    responses(
        (status = 200, description = "Newline-joined key list", body = String, content_type = "text/plain"),
        (status = 500, description = "Store not configured", body = String, content_type = "text/plain")
    ),
    tag = "proxy"
)]
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<(StatusCode, String), ApiError> {
    let store = state.store()?;

    let scan_prefix = state.effective_key(query.prefix());
    let raw_keys = store.scan_prefix(&scan_prefix)?;

    let keys = raw_keys
        .iter()
        .map(|k| k.strip_prefix(&state.config.prefix).unwrap_or(k));

    let body = if query.encode() {
        keys.map(|k| encode_key(k)).collect::<Vec<_>>().join("\n")
    } else {
        keys.collect::<Vec<_>>().join("\n")
    };

    tracing::info!(
        "Listed {} keys (filter: {:?}, encode: {})",
        raw_keys.len(),
        query.prefix,
        query.encode()
    );
    Ok((StatusCode::OK, body))
}
