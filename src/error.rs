use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for the proxy endpoints
///
/// Maps each failure mode to its HTTP status and fixed plain-text body.
/// Checks happen top-to-bottom in every handler: configured first, then
/// view-only, then key existence.
#[derive(Debug)]
pub enum ApiError {
    /// No store has been configured for this process
    NotConfigured,
    /// Mutation attempted through a view-only proxy
    ViewOnly,
    /// Key absent from the store
    KeyNotFound,
    /// The store itself failed
    Store(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotConfigured => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Database is not configured".to_string())
            }
            ApiError::ViewOnly => (StatusCode::UNAUTHORIZED, "Database is view only".to_string()),
            ApiError::KeyNotFound => (StatusCode::NOT_FOUND, String::new()),
            ApiError::Store(err) => {
                tracing::error!("Store operation failed: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
        };

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Store(err)
    }
}
