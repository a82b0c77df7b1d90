//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all binaries.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log filter used when RUST_LOG is unset
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables using `prefix`
    /// (e.g. `GATEWAY` reads `GATEWAY_HOST` and `GATEWAY_PORT`).
    pub fn from_env(prefix: &str, defaults: ServiceConfig) -> Self {
        Self {
            service_name: defaults.service_name,
            host: env::var(format!("{}_HOST", prefix)).unwrap_or(defaults.host),
            port: env::var(format!("{}_PORT", prefix))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: env::var(format!("{}_LOG_LEVEL", prefix)).unwrap_or(defaults.log_level),
        }
    }

    /// Get the full bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}

/// Read a numeric setting, falling back to `default` when unset or unparsable.
pub fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
