//! Gateway configuration.

use common::ServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address and log defaults
    pub server: ServiceConfig,
    /// Allow cross-origin requests from any origin
    pub cors_permissive: bool,
}

impl GatewayConfig {
    /// Load configuration from `GATEWAY_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server: ServiceConfig::from_env("GATEWAY", defaults.server),
            cors_permissive: common::env_or("GATEWAY_CORS_PERMISSIVE", defaults.cors_permissive),
        }
    }

    /// Override host and port, e.g. from command line flags.
    pub fn with_addr(mut self, host: impl Into<String>, port: u16) -> Self {
        self.server.host = host.into();
        self.server.port = port;
        self
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig {
                service_name: "gateway".to_string(),
                host: "0.0.0.0".to_string(),
                port: 3000,
                log_level: "info,tower_http=debug".to_string(),
            },
            cors_permissive: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binds_all_interfaces_on_3000() {
        let config = GatewayConfig::default();
        assert_eq!(config.server.addr(), "0.0.0.0:3000");
        assert_eq!(config.server.service_name, "gateway");
    }

    #[test]
    fn test_with_addr_overrides_host_and_port() {
        let config = GatewayConfig::default().with_addr("127.0.0.1", 8080);
        assert_eq!(config.server.addr(), "127.0.0.1:8080");
    }
}
