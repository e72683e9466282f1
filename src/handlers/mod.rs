pub mod delete;
pub mod get;
pub mod health;
pub mod list;
pub mod set;

pub use delete::delete_handler;
pub use get::get_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use set::set_handler;

use crate::routes;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Build a mountable proxy route-group over `state`.
///
/// Dispatch is explicit per method: GET/POST on the collection root,
/// GET/DELETE on single keys. Unsupported verbs on these paths get axum's
/// standard 405. One factory serves both named configurations; whether the
/// group is view-only or read-write is decided entirely by the
/// `ProxyConfig` inside `state`, so an application can mount a public
/// view-only group and a privileged read-write group side by side.
///
/// The group contains only the proxy routes. Keys are opaque, so no static
/// path may shadow `/{key}`; the health endpoint lives in its own group
/// ([`health_router`]) mounted beside this one.
pub fn proxy_router(state: AppState) -> Router {
    Router::new()
        .route(routes::ROOT, get(list_handler).post(set_handler))
        .route(routes::KEY, get(get_handler).delete(delete_handler))
        .with_state(state)
}

/// Health check route-group, kept separate from the proxy group so that
/// `/health` never shadows a stored key of the same name.
pub fn health_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .with_state(state)
}
