//! Export authorization
//!
//! Identity and authorization are separate steps. The extractor proves who the
//! caller is; an [`ExportAuthorizer`] decides whether that caller may pull the
//! catalog. A denied caller never reaches the catalog.

use async_trait::async_trait;

use tally_auth::UserInfo;

/// Decides whether an authenticated user may export the catalog
#[async_trait]
pub trait ExportAuthorizer: Send + Sync {
    async fn can_export(&self, user: &UserInfo) -> bool;

    /// Authorizer name for logging/debugging
    fn name(&self) -> &'static str;
}

/// Grants export to holders of [`tally_auth::Permission::Export`]
///
/// That is Manager and above, or any role with an explicit `export` grant.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionAuthorizer;

#[async_trait]
impl ExportAuthorizer for PermissionAuthorizer {
    async fn can_export(&self, user: &UserInfo) -> bool {
        user.can_export()
    }

    fn name(&self) -> &'static str {
        "permission"
    }
}

#[cfg(test)]
mod tests {
    use tally_auth::{Permission, Role};

    use super::*;

    #[tokio::test]
    async fn test_role_gate() {
        let authz = PermissionAuthorizer;

        for (role, allowed) in [
            (Role::Viewer, false),
            (Role::Editor, false),
            (Role::Manager, true),
            (Role::Owner, true),
        ] {
            let user = UserInfo::with_role("u1", "u1@example.com", role);
            assert_eq!(authz.can_export(&user).await, allowed, "{role:?}");
        }
    }

    #[tokio::test]
    async fn test_explicit_grant() {
        let user = UserInfo::with_role("u1", "u1@example.com", Role::Viewer)
            .grant(Permission::Export);
        assert!(PermissionAuthorizer.can_export(&user).await);
    }
}
