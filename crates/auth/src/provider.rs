//! Authentication providers
//!
//! Defines the `AuthProvider` trait for validating tokens and extracting user info.

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use crate::claims::{TokenClaims, extract_jwt};
use crate::error::{AuthError, Result};
use crate::user::UserInfo;

/// Authentication provider trait
///
/// Implement this trait to add new identity backends.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Validate a token and return user information
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if:
    /// - Token format is invalid
    /// - Token signature verification fails
    /// - Token has expired
    /// - Token claims are invalid
    async fn validate(&self, token: &str) -> Result<UserInfo>;

    /// Provider name for logging/debugging
    fn name(&self) -> &'static str;
}

/// Local JWT provider using HMAC-SHA256
///
/// Validates JWT tokens signed with a shared secret.
///
/// # Example
///
/// ```
/// use tally_auth::LocalJwtProvider;
///
/// let provider = LocalJwtProvider::new(b"your-secret-key-at-least-32-bytes!");
/// ```
pub struct LocalJwtProvider {
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: Option<String>,
}

impl std::fmt::Debug for LocalJwtProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalJwtProvider")
            .field("algorithm", &"HS256")
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl LocalJwtProvider {
    /// Create a new provider with HMAC-SHA256 secret
    ///
    /// # Arguments
    ///
    /// * `secret` - Secret key for HMAC-SHA256 (should be at least 32 bytes)
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // Only `exp` is mandatory, and the claims struct already requires it
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer: None,
        }
    }

    /// Create a provider with a specific issuer requirement
    ///
    /// Tokens must have an `iss` claim matching this issuer.
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        let issuer = issuer.into();
        self.validation.set_issuer(&[&issuer]);
        self.issuer = Some(issuer);
        self
    }
}

#[async_trait]
impl AuthProvider for LocalJwtProvider {
    async fn validate(&self, token: &str) -> Result<UserInfo> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let jwt = extract_jwt(token).ok_or(AuthError::InvalidTokenFormat)?;

        let token_data = decode::<TokenClaims>(jwt, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(error = ?e, "JWT validation failed");
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::ImmatureSignature => {
                        AuthError::TokenNotYetValid
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                    _ => AuthError::InvalidClaims(e.to_string()),
                }
            })?;

        Ok(UserInfo::from_claims(&token_data.claims))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
