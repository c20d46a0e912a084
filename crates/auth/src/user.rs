//! Authenticated user information
//!
//! UserInfo represents the authenticated caller of a request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::claims::TokenClaims;
use crate::roles::{Permission, Role};

/// Authenticated user information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInfo {
    /// User ID
    pub id: String,

    /// Email address
    pub email: String,

    /// User's role (stored as string for serialization)
    #[serde(default = "default_role")]
    pub role: String,

    /// Permissions granted explicitly, independent of role
    #[serde(default)]
    pub permissions: Vec<String>,

    /// Additional metadata
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

fn default_role() -> String {
    "viewer".to_string()
}

impl UserInfo {
    /// Create a new user with minimal info (defaults to Viewer role)
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_role(id, email, Role::Viewer)
    }

    /// Create a new user with a specific role
    pub fn with_role(id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role: role.as_str().to_string(),
            permissions: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Grant an explicit permission
    pub fn grant(mut self, permission: Permission) -> Self {
        self.permissions.push(permission.as_str().to_string());
        self
    }

    /// Get parsed role (defaults to Viewer if invalid)
    pub fn parsed_role(&self) -> Role {
        Role::parse(&self.role).unwrap_or(Role::Viewer)
    }

    /// Check if user has a specific permission, via role or explicit grant
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.parsed_role().has_permission(permission)
            || self
                .permissions
                .iter()
                .any(|p| Permission::parse(p) == Some(permission))
    }

    /// Check if user may download catalog exports
    pub fn can_export(&self) -> bool {
        self.has_permission(Permission::Export)
    }

    /// Get auth method from metadata
    pub fn auth_method(&self) -> Option<&str> {
        self.metadata.get("auth_method").map(|s| s.as_str())
    }

    /// Create UserInfo from JWT claims
    pub fn from_claims(claims: &TokenClaims) -> Self {
        let mut metadata = HashMap::new();
        metadata.insert("token_id".to_string(), claims.token_id.clone());
        metadata.insert("auth_method".to_string(), "jwt".to_string());

        Self {
            id: claims.user_id.clone(),
            email: claims.email.clone(),
            role: claims.role.clone(),
            permissions: claims.permissions.clone(),
            metadata,
        }
    }
}
