//! Catalog source configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Catalog configuration
///
/// # Example
///
/// ```toml
/// [catalog]
/// path = "data/catalog.json"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog document, re-read on every export
    /// Default: "catalog.json"
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("catalog.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config: CatalogConfig = toml::from_str("").unwrap();
        assert_eq!(config.path, PathBuf::from("catalog.json"));
    }

    #[test]
    fn test_custom_path() {
        let config: CatalogConfig = toml::from_str(r#"path = "/srv/shop/catalog.json""#).unwrap();
        assert_eq!(config.path, PathBuf::from("/srv/shop/catalog.json"));
    }
}
