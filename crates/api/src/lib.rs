//! Tally API
//!
//! HTTP API for catalog CSV exports.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use tally_api::{build_router, AppState};
//! use tally_auth::LocalJwtProvider;
//! use tally_catalog::JsonFileCatalog;
//!
//! let state = AppState::new(
//!     Arc::new(LocalJwtProvider::new(secret)),
//!     Arc::new(JsonFileCatalog::new("catalog.json")),
//! );
//!
//! let app = build_router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness, no auth
//! - `GET /api/v1/export/products` - Published catalog as a CSV attachment
//!
//! # Request flow
//!
//! ```text
//! token ──► AuthUser ──► ExportAuthorizer ──► CatalogSource ──► build_document ──► CsvAttachment
//!            (401)           (403)               (502)            (500)
//! ```

pub mod audit;
pub mod auth;
pub mod authz;
pub mod delivery;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports
pub use audit::{AuditAction, audit_layer};
pub use auth::{AuthUser, HasAuthProvider, Permission, Role, UserInfo};
pub use authz::{ExportAuthorizer, PermissionAuthorizer};
pub use delivery::{CsvAttachment, attachment_filename};
pub use error::{ApiError, ErrorResponse, Result};
pub use routes::{RouterOptions, build_router, build_router_with_options};
pub use state::{AppState, Delivery, ExportSettings};
