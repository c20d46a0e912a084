//! Authentication error types

use thiserror::Error;

/// Result type for auth operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur while validating a token
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token is missing or empty
    #[error("missing token")]
    MissingToken,

    /// Token format is invalid (not tally_<jwt>)
    #[error("invalid token format")]
    InvalidTokenFormat,

    /// JWT signature verification failed
    #[error("invalid token signature")]
    InvalidSignature,

    /// Token has expired
    #[error("token expired")]
    TokenExpired,

    /// Token is not yet valid (nbf claim)
    #[error("token not yet valid")]
    TokenNotYetValid,

    /// Token claims are invalid
    #[error("invalid token claims: {0}")]
    InvalidClaims(String),
}
