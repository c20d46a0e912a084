//! API server configuration

use serde::Deserialize;

/// API server configuration
///
/// # Example
///
/// ```toml
/// [api_server]
/// host = "0.0.0.0"        # default
/// port = 3000             # default
/// audit_logging = false   # default
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiServerConfig {
    /// Host to bind to
    /// Default: "0.0.0.0"
    pub host: String,

    /// Port to listen on
    /// Default: 3000
    pub port: u16,

    /// Emit one audit event per request on the `audit` target
    /// Default: false
    pub audit_logging: bool,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            audit_logging: false,
        }
    }
}

impl ApiServerConfig {
    /// `host:port` for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
