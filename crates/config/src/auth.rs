//! Authentication configuration
//!
//! Tokens are HS256 JWTs signed with a shared secret. The secret is only
//! required when the HTTP server runs; offline exports never touch it.

use serde::Deserialize;

/// Minimum accepted secret length in bytes
pub const MIN_SECRET_LEN: usize = 32;

/// Authentication configuration
///
/// # Example
///
/// ```toml
/// [auth]
/// jwt_secret = "your-secret-key-at-least-32-characters-long"
/// issuer = "tally"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret, at least 32 characters
    pub jwt_secret: Option<String>,

    /// Expected `iss` claim; unchecked when unset
    pub issuer: Option<String>,
}

impl AuthConfig {
    pub fn jwt_secret_bytes(&self) -> Option<&[u8]> {
        self.jwt_secret.as_ref().map(|s| s.as_bytes())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(secret) = &self.jwt_secret
            && secret.len() < MIN_SECRET_LEN
        {
            return Err(format!(
                "must be at least {} characters for security",
                MIN_SECRET_LEN
            ));
        }
        Ok(())
    }
}
