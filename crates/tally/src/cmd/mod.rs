//! Command implementations for the Tally CLI

pub mod api_server;
pub mod export;
pub mod serve;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tally_config::Config;
use tracing::info;

/// Searched in order when no `--config` is given
const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/tally.toml", "tally.toml"];

/// Configuration plus the file it came from, if any
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// Report where configuration came from; call once logging is up
    pub fn log_source(&self) {
        match &self.source {
            Some(path) => info!(config = %path.display(), "using config file"),
            None => info!("no config file found, using defaults"),
        }
    }
}

/// Load configuration
///
/// An explicit path must exist. Without one, the default paths are tried and
/// built-in defaults are used when none exist.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        let config = Config::from_file(path).context("failed to load configuration")?;
        return Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
        });
    }

    for candidate in DEFAULT_CONFIG_PATHS {
        let path = Path::new(candidate);
        if path.exists() {
            let config = Config::from_file(path).context("failed to load configuration")?;
            return Ok(LoadedConfig {
                config,
                source: Some(path.to_path_buf()),
            });
        }
    }

    Ok(LoadedConfig {
        config: Config::default(),
        source: None,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = load_config(Some(&missing)).err().unwrap();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_explicit_config_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[export]\nfilename = \"nightly\"").unwrap();

        let loaded = load_config(Some(file.path())).unwrap();
        assert_eq!(loaded.config.export.filename, "nightly");
        assert_eq!(loaded.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[auth]\njwt_secret = \"short\"").unwrap();

        assert!(load_config(Some(file.path())).is_err());
    }
}
