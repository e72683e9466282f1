mod api_doc;
mod config;
mod encoding;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Context;
use api_doc::ApiDoc;
use config::{Config, StoreBackend};
use state::{AppState, ProxyConfig};
use std::sync::Arc;
use store::{MemoryStore, Store};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("kv-proxy starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store: Option<Arc<dyn Store>> = match config.store_backend {
        StoreBackend::Memory => Some(Arc::new(MemoryStore::new())),
        StoreBackend::None => None,
    };

    let state = AppState::new(
        store,
        ProxyConfig {
            view_only: config.view_only,
            prefix: config.prefix.clone(),
        },
    );

    let app = handlers::proxy_router(state.clone())
        .merge(handlers::health_router(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
