//! Authentication extractor for Axum
//!
//! # Setup
//!
//! Your app state must implement `HasAuthProvider`:
//!
//! ```ignore
//! use std::sync::Arc;
//! use tally_auth::{AuthProvider, LocalJwtProvider};
//! use tally_api::auth::HasAuthProvider;
//!
//! struct AppState {
//!     auth: Arc<dyn AuthProvider>,
//! }
//!
//! impl HasAuthProvider for AppState {
//!     fn auth_provider(&self) -> Arc<dyn AuthProvider> {
//!         Arc::clone(&self.auth)
//!     }
//! }
//! ```

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, header::COOKIE, request::Parts},
};
use serde::Deserialize;
use tracing::debug;

use tally_auth::{AuthProvider, UserInfo};

use crate::error::ApiError;

/// Maximum token size (8KB) - prevents memory exhaustion attacks
const MAX_TOKEN_SIZE: usize = 8 * 1024;

/// Maximum cookie header size (16KB)
const MAX_COOKIE_SIZE: usize = 16 * 1024;

/// Cookie carrying the session token
pub const TOKEN_COOKIE: &str = "tally_token";

/// Trait for app state that provides an auth provider
pub trait HasAuthProvider: Send + Sync {
    fn auth_provider(&self) -> Arc<dyn AuthProvider>;
}

/// Query parameters that may contain a token
#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Extract token from request with size limits
///
/// Checks in order:
/// 1. Authorization header (Bearer or raw)
/// 2. Query parameter (?token=)
/// 3. Cookie (tally_token)
///
/// Oversized tokens are treated as missing.
pub fn extract_token(parts: &Parts) -> Option<String> {
    extract_from_auth_header(parts)
        .or_else(|| extract_from_query(parts))
        .or_else(|| extract_from_cookie(parts))
        .filter(|token| token.len() <= MAX_TOKEN_SIZE)
}

fn extract_from_auth_header(parts: &Parts) -> Option<String> {
    let auth_header = parts.headers.get(AUTHORIZATION)?;

    // "Bearer " = 7 chars
    if auth_header.len() > MAX_TOKEN_SIZE + 7 {
        return None;
    }

    let auth_str = auth_header.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str).trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

fn extract_from_query(parts: &Parts) -> Option<String> {
    let query = parts.uri.query()?;

    if query.len() > MAX_TOKEN_SIZE * 2 {
        return None;
    }

    let params: TokenQuery = serde_urlencoded::from_str(query).ok()?;
    params.token.filter(|t| !t.is_empty())
}

fn extract_from_cookie(parts: &Parts) -> Option<String> {
    let cookie_header = parts.headers.get(COOKIE)?;

    if cookie_header.len() > MAX_COOKIE_SIZE {
        return None;
    }

    let cookies = cookie_header.to_str().ok()?;

    for cookie in cookies.split(';') {
        let Some((name, value)) = cookie.trim().split_once('=') else {
            continue;
        };
        if name != TOKEN_COOKIE {
            continue;
        }

        // Handle quoted values: tally_token="value"
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);

        let decoded = url_decode_simple(value);
        if !decoded.is_empty() {
            return Some(decoded);
        }
    }
    None
}

/// Simple URL decoding for cookie values
fn url_decode_simple(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if hex.len() == 2
                && let Ok(byte) = u8::from_str_radix(&hex, 16)
            {
                result.push(byte as char);
                continue;
            }
            // Invalid escape, keep as-is
            result.push('%');
            result.push_str(&hex);
        } else if c == '+' {
            result.push(' ');
        } else {
            result.push(c);
        }
    }

    result
}

/// Authenticated user extractor
///
/// Rejects with 401 when no token is present or the token fails validation.
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserInfo);

impl AuthUser {
    pub fn user(&self) -> &UserInfo {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = UserInfo;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: HasAuthProvider + Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts).ok_or(ApiError::AuthRequired)?;

        let provider = state.auth_provider();
        let user = provider.validate(&token).await.map_err(|e| {
            debug!(provider = provider.name(), error = %e, "token rejected");
            ApiError::from(e)
        })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn parts(request: Request<()>) -> Parts {
        request.into_parts().0
    }

    #[test]
    fn test_bearer_header() {
        let p = parts(
            Request::builder()
                .header(AUTHORIZATION, "Bearer tally_abc")
                .body(())
                .unwrap(),
        );
        assert_eq!(extract_token(&p).as_deref(), Some("tally_abc"));
    }

    #[test]
    fn test_header_wins_over_query_and_cookie() {
        let p = parts(
            Request::builder()
                .uri("/x?token=from_query")
                .header(AUTHORIZATION, "Bearer from_header")
                .header(COOKIE, "tally_token=from_cookie")
                .body(())
                .unwrap(),
        );
        assert_eq!(extract_token(&p).as_deref(), Some("from_header"));
    }

    #[test]
    fn test_query_param() {
        let p = parts(Request::builder().uri("/x?a=1&token=q").body(()).unwrap());
        assert_eq!(extract_token(&p).as_deref(), Some("q"));
    }

    #[test]
    fn test_cookie_among_others() {
        let p = parts(
            Request::builder()
                .header(COOKIE, "theme=dark; tally_token=\"c%2Bd\"; other=1")
                .body(())
                .unwrap(),
        );
        assert_eq!(extract_token(&p).as_deref(), Some("c+d"));
    }

    #[test]
    fn test_similar_cookie_name_ignored() {
        let p = parts(
            Request::builder()
                .header(COOKIE, "not_tally_token=x")
                .body(())
                .unwrap(),
        );
        assert!(extract_token(&p).is_none());
    }

    #[test]
    fn test_oversized_token_treated_as_missing() {
        let huge = "a".repeat(MAX_TOKEN_SIZE + 1);
        let p = parts(
            Request::builder()
                .uri(format!("/x?token={huge}"))
                .body(())
                .unwrap(),
        );
        assert!(extract_token(&p).is_none());
    }

    #[test]
    fn test_no_token() {
        let p = parts(Request::builder().uri("/x").body(()).unwrap());
        assert!(extract_token(&p).is_none());
    }

    #[test]
    fn test_url_decode_simple() {
        assert_eq!(url_decode_simple("hello"), "hello");
        assert_eq!(url_decode_simple("hello%20world"), "hello world");
        assert_eq!(url_decode_simple("hello+world"), "hello world");
        assert_eq!(url_decode_simple("%41%42%43"), "ABC");
        assert_eq!(url_decode_simple("invalid%GG"), "invalid%GG");
        assert_eq!(url_decode_simple("trailing%"), "trailing%");
    }
}
