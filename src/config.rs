use anyhow::{Context, Result, bail};
use std::env;

/// Which store backend the process should serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-process memory store.
    Memory,
    /// No store configured; every proxy operation reports 500.
    None,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    pub view_only: bool,
    pub prefix: String,
    pub store_backend: StoreBackend,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_host = env::var("SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let view_only = env::var("PROXY_VIEW_ONLY")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .context("PROXY_VIEW_ONLY must be 'true' or 'false'")?;

        let prefix = env::var("PROXY_PREFIX").unwrap_or_default();

        let store_backend = match env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "memory".to_string())
            .as_str()
        {
            "memory" => StoreBackend::Memory,
            "none" => StoreBackend::None,
            other => bail!("STORE_BACKEND must be 'memory' or 'none', got '{}'", other),
        };

        Ok(Config {
            service_host,
            service_port,
            view_only,
            prefix,
            store_backend,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store backend: {:?}", self.store_backend);
        tracing::info!(
            "  Proxy mode: {}",
            if self.view_only { "view-only" } else { "read-write" }
        );
        tracing::info!(
            "  Key prefix: {}",
            if self.prefix.is_empty() { "(none)" } else { &self.prefix }
        );
        tracing::info!(
            "  Service listening on: {}:{}",
            self.service_host,
            self.service_port
        );
    }
}
