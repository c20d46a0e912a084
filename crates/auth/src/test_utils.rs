//! Test utilities for generating JWT tokens
//!
//! These helpers create valid signed JWTs for testing authentication flows.
//! Use these instead of mocking - they test the real validation code path.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use crate::Role;
use crate::claims::{TOKEN_PREFIX, TokenClaims};

/// Test secret for JWT signing (32 bytes for HS256)
pub const TEST_SECRET: &[u8] = b"test-secret-key-32-bytes-long!!!";

/// Full set of knobs for a signed test token
#[derive(Debug, Clone)]
pub struct TokenOptions<'a> {
    pub user_id: &'a str,
    pub email: &'a str,
    pub role: Role,
    /// Explicit permission grants (e.g. `["export"]`)
    pub permissions: &'a [&'a str],
    pub issuer: Option<&'a str>,
    pub secret: &'a [u8],
    pub expires_in: Duration,
}

impl<'a> TokenOptions<'a> {
    /// Defaults: no grants, no issuer, [`TEST_SECRET`], one hour lifetime
    pub fn new(user_id: &'a str, email: &'a str, role: Role) -> Self {
        Self {
            user_id,
            email,
            role,
            permissions: &[],
            issuer: None,
            secret: TEST_SECRET,
            expires_in: Duration::hours(1),
        }
    }
}

/// Create a test token with default settings
///
/// # Example
///
/// ```
/// use tally_auth::test_utils::create_test_token;
/// use tally_auth::Role;
///
/// let token = create_test_token("user-1", "test@example.com", Role::Manager);
/// assert!(token.starts_with("tally_"));
/// ```
pub fn create_test_token(user_id: &str, email: &str, role: Role) -> String {
    create_token(TokenOptions::new(user_id, email, role))
}

/// Create a test token with full control over all options
pub fn create_token(options: TokenOptions<'_>) -> String {
    let now = Utc::now();

    let claims = TokenClaims {
        token_id: format!("test-token-{}", options.user_id),
        user_id: options.user_id.to_string(),
        email: options.email.to_string(),
        role: options.role.as_str().to_string(),
        permissions: options.permissions.iter().map(|p| p.to_string()).collect(),
        subject: Some(options.user_id.to_string()),
        expires_at: (now + options.expires_in).timestamp(),
        issued_at: now.timestamp(),
        not_before: None,
        issuer: options.issuer.map(String::from),
    };

    let jwt = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(options.secret),
    )
    .expect("failed to encode test JWT");

    format!("{}{}", TOKEN_PREFIX, jwt)
}

/// Create a viewer token
pub fn viewer_token(user_id: &str, email: &str) -> String {
    create_test_token(user_id, email, Role::Viewer)
}

/// Create an editor token
pub fn editor_token(user_id: &str, email: &str) -> String {
    create_test_token(user_id, email, Role::Editor)
}

/// Create a manager token (holds the export permission)
pub fn manager_token(user_id: &str, email: &str) -> String {
    create_test_token(user_id, email, Role::Manager)
}

/// Create an owner token
pub fn owner_token(user_id: &str, email: &str) -> String {
    create_test_token(user_id, email, Role::Owner)
}
