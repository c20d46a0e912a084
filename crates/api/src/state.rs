//! Application state
//!
//! Every collaborator the export handler touches is injected here; nothing is
//! looked up globally.

use std::path::PathBuf;
use std::sync::Arc;

use tally_auth::AuthProvider;
use tally_catalog::CatalogSource;

use crate::auth::HasAuthProvider;
use crate::authz::{ExportAuthorizer, PermissionAuthorizer};

/// Default attachment base name
pub const DEFAULT_EXPORT_FILENAME: &str = "products-export";

/// How the encoded document reaches the response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Delivery {
    #[default]
    Memory,
    /// Through a temporary file in `dir`, removed after reading
    Spool { dir: PathBuf },
}

/// Per-export behavior
#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Attachment base name; `.csv` is appended
    pub filename: String,
    pub delivery: Delivery,
    /// Refuse exports with more published items than this
    pub max_items: Option<usize>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            filename: DEFAULT_EXPORT_FILENAME.to_string(),
            delivery: Delivery::Memory,
            max_items: None,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Token validation
    pub auth: Arc<dyn AuthProvider>,
    /// Export permission check
    pub authorizer: Arc<dyn ExportAuthorizer>,
    /// Published item snapshot
    pub catalog: Arc<dyn CatalogSource>,
    pub export: ExportSettings,
}

impl AppState {
    /// State with the permission-based authorizer and default export settings
    pub fn new(auth: Arc<dyn AuthProvider>, catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            auth,
            authorizer: Arc::new(PermissionAuthorizer),
            catalog,
            export: ExportSettings::default(),
        }
    }

    pub fn with_authorizer(mut self, authorizer: Arc<dyn ExportAuthorizer>) -> Self {
        self.authorizer = authorizer;
        self
    }

    pub fn with_export_settings(mut self, export: ExportSettings) -> Self {
        self.export = export;
        self
    }
}

impl HasAuthProvider for AppState {
    fn auth_provider(&self) -> Arc<dyn AuthProvider> {
        Arc::clone(&self.auth)
    }
}
