//! Configuration validation
//!
//! Checks values that parse but cannot work:
//! - JWT secret shorter than the minimum
//! - Export filename that is empty once quotes, control characters and
//!   whitespace are removed
//! - A zero item ceiling

use crate::Config;
use crate::error::{ConfigError, Result};

/// Validate the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_auth(config)?;
    validate_export(config)?;
    Ok(())
}

fn validate_auth(config: &Config) -> Result<()> {
    config
        .auth
        .validate()
        .map_err(|message| ConfigError::invalid_value("auth", "jwt_secret", message))
}

fn validate_export(config: &Config) -> Result<()> {
    let export = &config.export;

    let usable = export
        .filename
        .chars()
        .filter(|c| *c != '"' && !c.is_control())
        .any(|c| !c.is_whitespace());
    if !usable {
        return Err(ConfigError::invalid_value(
            "export",
            "filename",
            "must not be empty",
        ));
    }

    if export.max_items == Some(0) {
        return Err(ConfigError::invalid_value(
            "export",
            "max_items",
            "must be greater than 0",
        ));
    }

    Ok(())
}
