//! API error types
//!
//! Provides structured error responses for the HTTP API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use tally_catalog::CatalogError;
use tally_export::ExportError;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// No token supplied
    #[error("Authentication required")]
    AuthRequired,

    /// Token failed validation
    #[error("Invalid authentication token")]
    InvalidToken,

    #[error("Authentication token has expired")]
    TokenExpired,

    /// Caller is authenticated but may not export
    #[error("You do not have permission to export products.")]
    PermissionDenied,

    /// More published items than the configured ceiling
    #[error("export of {count} items exceeds the limit of {max}")]
    ExportTooLarge { count: usize, max: usize },

    /// Catalog could not be read; never reported as an empty export
    #[error("catalog fetch failed: {0}")]
    FetchFailure(#[from] CatalogError),

    /// Document could not be encoded
    #[error("export encoding failed: {0}")]
    Encode(#[from] ExportError),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthRequired | Self::InvalidToken | Self::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::ExportTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::FetchFailure(_) => StatusCode::BAD_GATEWAY,
            Self::Encode(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthRequired => "AUTH_REQUIRED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::ExportTooLarge { .. } => "EXPORT_TOO_LARGE",
            Self::FetchFailure(_) => "FETCH_FAILED",
            Self::Encode(_) | Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to return to the caller
    ///
    /// Upstream and internal failures carry server paths and OS errors, so
    /// they get a fixed text; the detail only goes to the log.
    pub fn public_message(&self) -> String {
        match self {
            Self::FetchFailure(_) => "The product catalog could not be read.".to_string(),
            Self::Encode(_) | Self::Internal(_) => {
                "The export could not be completed.".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<tally_auth::AuthError> for ApiError {
    fn from(e: tally_auth::AuthError) -> Self {
        match e {
            tally_auth::AuthError::MissingToken => Self::AuthRequired,
            tally_auth::AuthError::TokenExpired => Self::TokenExpired,
            _ => Self::InvalidToken,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code (machine-readable)
    pub error: &'static str,
    /// Error message (human-readable)
    pub message: String,
    /// HTTP status, repeated for clients that only see the body
    pub status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.code(),
            message: self.public_message(),
            status: status.as_u16(),
        };

        tracing::warn!(
            error_code = body.error,
            error_message = %self,
            status = %status,
            "API error"
        );

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
