//! JWT token claims
//!
//! Defines the structure of JWT tokens used for authentication.

use serde::{Deserialize, Serialize};

/// JWT claims for API tokens
///
/// Token format: `tally_<jwt>`
/// Where JWT contains these claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Token ID (for revocation)
    #[serde(rename = "tid")]
    pub token_id: String,

    /// User ID
    #[serde(rename = "uid")]
    pub user_id: String,

    /// User email
    #[serde(rename = "email", default)]
    pub email: String,

    /// User's role (viewer, editor, manager, owner)
    #[serde(rename = "role", default = "default_role")]
    pub role: String,

    /// Explicit permissions granted on top of the role (e.g. "export")
    #[serde(default)]
    pub permissions: Vec<String>,

    // Standard JWT claims
    /// Subject (user ID)
    #[serde(rename = "sub", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(rename = "exp")]
    pub expires_at: i64,

    /// Issued at (Unix timestamp)
    #[serde(rename = "iat")]
    pub issued_at: i64,

    /// Not before (Unix timestamp)
    #[serde(rename = "nbf", skip_serializing_if = "Option::is_none")]
    pub not_before: Option<i64>,

    /// Issuer
    #[serde(rename = "iss", skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

fn default_role() -> String {
    "viewer".to_string()
}

impl TokenClaims {
    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        self.expires_at < chrono::Utc::now().timestamp()
    }
}

/// Token prefix for Tally API tokens
pub const TOKEN_PREFIX: &str = "tally_";

/// Check if a string looks like a Tally API token
pub fn is_api_token_format(token: &str) -> bool {
    token.starts_with(TOKEN_PREFIX) && token.len() > TOKEN_PREFIX.len() + 10
}

/// Extract JWT from prefixed token (removes "tally_" prefix)
pub fn extract_jwt(token: &str) -> Option<&str> {
    if is_api_token_format(token) {
        Some(&token[TOKEN_PREFIX.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_api_token_format() {
        assert!(is_api_token_format(
            "tally_eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"
        ));
        assert!(!is_api_token_format("bearer_something"));
        assert!(!is_api_token_format("tally_")); // Too short
    }

    #[test]
    fn test_extract_jwt() {
        let token = "tally_eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";
        assert_eq!(
            extract_jwt(token),
            Some("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9")
        );
        assert_eq!(extract_jwt("invalid"), None);
    }

    #[test]
    fn test_permissions_default_empty() {
        let json = r#"{"tid":"t1","uid":"u1","exp":1,"iat":1}"#;
        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert!(claims.permissions.is_empty());
        assert_eq!(claims.role, "viewer");
        assert!(claims.is_expired());
    }
}
