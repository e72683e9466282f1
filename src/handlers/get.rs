use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// GET /{key} handler - read a single value
///
/// 404 with an empty body when the key is absent; an empty-string value is a
/// 200 with an empty body, which is not the same thing.
#[utoipa::path(
    get,
    path = routes::KEY,
    params(
        ("key" = String, Path, description = "Key to read, relative to the configured prefix")
    ),
    responses(
        (status = 200, description = "Raw stored value", body = String, content_type = "text/plain"),
        (status = 404, description = "Key absent"),
        (status = 500, description = "Store not configured", body = String, content_type = "text/plain")
    ),
    tag = "proxy"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<(StatusCode, String), ApiError> {
    let store = state.store()?;

    match store.get(&state.effective_key(&key))? {
        Some(value) => {
            tracing::debug!("Read key: {}", key);
            Ok((StatusCode::OK, value))
        }
        None => Err(ApiError::KeyNotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::proxy_router;
    use crate::state::ProxyConfig;
    use crate::store::{MemoryStore, Store};
    use axum::{Router, body::Body, http::Request};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(store: Option<Arc<dyn Store>>, prefix: &str) -> Router {
        proxy_router(AppState::new(
            store,
            ProxyConfig {
                view_only: false,
                prefix: prefix.to_string(),
            },
        ))
    }

    async fn get_key(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_get_returns_raw_value() {
        let store = MemoryStore::new();
        store.set("app/x", "1").unwrap();
        let app = test_app(Some(Arc::new(store)), "app/");

        let (status, body) = get_key(app, "/x").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "1");
    }

    #[tokio::test]
    async fn test_get_missing_key_is_404_empty() {
        let app = test_app(Some(Arc::new(MemoryStore::new())), "");
        let (status, body) = get_key(app, "/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn test_get_empty_value_is_200_not_404() {
        let store = MemoryStore::new();
        store.set("empty", "").unwrap();
        let app = test_app(Some(Arc::new(store)), "");

        let (status, body) = get_key(app, "/empty").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn test_get_does_not_leak_unprefixed_keys() {
        // A key outside the configured namespace is invisible to the proxy
        let store = MemoryStore::new();
        store.set("x", "bare").unwrap();
        store.set("app/x", "namespaced").unwrap();
        let app = test_app(Some(Arc::new(store)), "app/");

        let (status, body) = get_key(app, "/x").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "namespaced");
    }

    #[tokio::test]
    async fn test_get_url_encoded_key_segment() {
        let store = MemoryStore::new();
        store.set("a b", "spaced").unwrap();
        let app = test_app(Some(Arc::new(store)), "");

        let (status, body) = get_key(app, "/a%20b").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "spaced");
    }

    #[tokio::test]
    async fn test_get_unconfigured_store() {
        let app = test_app(None, "");
        let (status, body) = get_key(app, "/k").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Database is not configured");
    }
}
