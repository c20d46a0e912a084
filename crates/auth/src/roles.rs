//! Roles and permissions for access control
//!
//! RBAC model with 4 roles and 3 explicit permissions.
//!
//! # Roles (hierarchy)
//!
//! - `Viewer` - Browse the catalog
//! - `Editor` - Edit products
//! - `Manager` - Run catalog exports
//! - `Owner` - Manage the store
//!
//! # Permissions
//!
//! - `Edit` - Create and edit products
//! - `Export` - Download the catalog as CSV
//! - `Manage` - Store settings and staff
//!
//! Note: reading the catalog is implicit for every authenticated user.

use std::fmt;

/// Staff role (ordered hierarchy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Browse the catalog
    Viewer = 0,
    /// Create and edit products
    Editor = 1,
    /// Export the catalog
    Manager = 2,
    /// Everything, including store management
    Owner = 3,
}

impl Role {
    /// Parse role from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "viewer" | "readonly" | "read_only" | "customer" => Some(Self::Viewer),
            "editor" | "author" | "contributor" => Some(Self::Editor),
            "manager" | "shop_manager" => Some(Self::Manager),
            "owner" | "administrator" | "admin" => Some(Self::Owner),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Editor => "editor",
            Self::Manager => "manager",
            Self::Owner => "owner",
        }
    }

    /// Check if this role has a permission
    pub fn has_permission(&self, permission: Permission) -> bool {
        *self >= permission.min_role()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Permission for a specific capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Create and edit products
    Edit,
    /// Download the catalog export
    Export,
    /// Store settings and staff
    Manage,
}

impl Permission {
    /// Parse permission from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "edit" | "write" | "edit_products" => Some(Self::Edit),
            "export" | "export_products" => Some(Self::Export),
            "manage" | "manage_options" => Some(Self::Manage),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Export => "export",
            Self::Manage => "manage",
        }
    }

    /// Minimum role that holds this permission implicitly
    pub fn min_role(&self) -> Role {
        match self {
            Self::Edit => Role::Editor,
            Self::Export => Role::Manager,
            Self::Manage => Role::Owner,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
