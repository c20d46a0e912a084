//! Tally Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Minimal config should just work - only specify what you need to change.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use tally_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[catalog]\npath = \"shop.json\"").unwrap();
//! assert_eq!(config.export.filename, "products-export");
//! ```
//!
//! # Example Config
//!
//! ```toml
//! [log]
//! level = "info"
//!
//! [api_server]
//! port = 3000
//!
//! [auth]
//! jwt_secret = "a-very-long-secret-key-that-is-at-least-32-chars"
//!
//! [catalog]
//! path = "data/catalog.json"
//!
//! [export]
//! filename = "products-export"
//! delivery = "spool"
//! ```

mod api_server;
mod auth;
mod catalog;
mod error;
mod export;
mod logging;
mod validation;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use api_server::ApiServerConfig;
pub use auth::{AuthConfig, MIN_SECRET_LEN};
pub use catalog::CatalogConfig;
pub use error::{ConfigError, Result};
pub use export::{DEFAULT_FILENAME, DeliveryMode, ExportConfig};
pub use logging::{LogConfig, LogFormat, LogLevel};

use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,

    pub api_server: ApiServerConfig,

    pub auth: AuthConfig,

    /// Where published items are read from
    pub catalog: CatalogConfig,

    /// Attachment naming, delivery and limits
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// JWT secret, required to serve HTTP
    pub fn require_jwt_secret(&self) -> Result<&[u8]> {
        self.auth
            .jwt_secret_bytes()
            .ok_or_else(|| ConfigError::missing_field("auth", "jwt_secret"))
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
