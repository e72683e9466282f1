use crate::error::ApiError;
use crate::store::Store;
use std::sync::Arc;

/// Immutable per-router configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// When set, POST and DELETE are rejected with 401.
    pub view_only: bool,
    /// Prepended to every caller-supplied key before touching the store,
    /// and stripped from every key returned to the caller.
    pub prefix: String,
}

/// Shared application state
///
/// The store is an explicit optional dependency: `None` models a process
/// whose backing database was never configured, and every proxy operation
/// reports that uniformly instead of panicking.
#[derive(Clone)]
pub struct AppState {
    pub store: Option<Arc<dyn Store>>,
    pub config: Arc<ProxyConfig>,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn Store>>, config: ProxyConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// The configured store, or the uniform "not configured" error.
    pub fn store(&self) -> Result<&dyn Store, ApiError> {
        match &self.store {
            Some(store) => Ok(store.as_ref()),
            None => Err(ApiError::NotConfigured),
        }
    }

    /// Caller-supplied key with the configured prefix applied.
    pub fn effective_key(&self, key: &str) -> String {
        format!("{}{}", self.config.prefix, key)
    }
}
