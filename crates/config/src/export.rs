//! Export configuration
//!
//! Controls the attachment name, how the document is delivered, and an
//! optional ceiling on the number of exported items.

use std::path::PathBuf;

use serde::Deserialize;

/// Default attachment name, without extension
pub const DEFAULT_FILENAME: &str = "products-export";

/// How a built document reaches the response body
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Serve straight from memory (default)
    #[default]
    Memory,
    /// Write to a temporary file, read it back, then remove it
    Spool,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Spool => "spool",
        }
    }
}

/// Export configuration
///
/// # Example
///
/// ```toml
/// [export]
/// filename = "products-export"   # ".csv" is appended
/// delivery = "memory"            # or "spool"
/// spool_dir = "/var/tmp/tally"   # default: system temp dir
/// max_items = 50000              # default: unlimited
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Attachment base name
    /// Default: "products-export"
    pub filename: String,

    /// Default: memory
    pub delivery: DeliveryMode,

    /// Directory for spooled documents
    pub spool_dir: Option<PathBuf>,

    /// Refuse exports with more published items than this
    pub max_items: Option<usize>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: DEFAULT_FILENAME.to_string(),
            delivery: DeliveryMode::Memory,
            spool_dir: None,
            max_items: None,
        }
    }
}

impl ExportConfig {
    /// Spool directory, falling back to the system temp dir
    pub fn spool_dir(&self) -> PathBuf {
        self.spool_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: ExportConfig = toml::from_str("").unwrap();
        assert_eq!(config.filename, "products-export");
        assert_eq!(config.delivery, DeliveryMode::Memory);
        assert!(config.max_items.is_none());
        assert_eq!(config.spool_dir(), std::env::temp_dir());
    }

    #[test]
    fn test_spool_delivery() {
        let toml = r#"
filename = "catalog"
delivery = "spool"
spool_dir = "/var/tmp/tally"
max_items = 100
"#;
        let config: ExportConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.filename, "catalog");
        assert_eq!(config.delivery, DeliveryMode::Spool);
        assert_eq!(config.spool_dir(), PathBuf::from("/var/tmp/tally"));
        assert_eq!(config.max_items, Some(100));
        assert_eq!(config.delivery.as_str(), "spool");
    }

    #[test]
    fn test_unknown_delivery_rejected() {
        assert!(toml::from_str::<ExportConfig>(r#"delivery = "email""#).is_err());
    }
}
