use utoipa::OpenApi;

use crate::error::{HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::ListQuery;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "kv-proxy API",
        version = "1.0.0",
        description = "An HTTP proxy over a key-value store with prefix namespacing and view-only mode"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::set::set_handler,
        handlers::get::get_handler,
        handlers::delete::delete_handler
    ),
    components(schemas(HealthResponse, UnhealthyResponse, ListQuery)),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "proxy", description = "Key-value proxy operations")
    )
)]
pub struct ApiDoc;
