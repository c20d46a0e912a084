//! Catalog export route
//!
//! # Routes
//!
//! - `GET /api/v1/export/products` - Every published item as one CSV attachment
//!
//! # Steps
//!
//! 1. Authenticate (401 on failure)
//! 2. Authorize through the injected `ExportAuthorizer` (403 on denial)
//! 3. Fetch the full published snapshot (502 on failure)
//! 4. Unify, project, sanitize and encode
//! 5. Deliver from memory or through a spool file
//!
//! Nothing is written to the response until the document is complete, so a
//! failure at any step yields a JSON error instead of a truncated file.

use std::time::Instant;

use axum::{Router, extract::State, routing::get};
use tracing::info;

use tally_auth::UserInfo;
use tally_export::build_document;

use crate::audit::AuditAction;
use crate::auth::AuthUser;
use crate::delivery::{self, CsvAttachment};
use crate::error::{ApiError, Result};
use crate::state::{AppState, Delivery};

/// Build the export router
pub fn routes() -> Router<AppState> {
    Router::new().route("/products", get(export_products))
}

async fn export_products(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<CsvAttachment> {
    let user = auth.user();

    if !state.authorizer.can_export(user).await {
        crate::audit_fail!(
            AuditAction::ExportDenied,
            "permission_denied",
            user_id = %user.id,
            role = %user.role,
            authorizer = state.authorizer.name()
        );
        return Err(ApiError::PermissionDenied);
    }

    run_export(&state, user).await.inspect_err(|e| {
        crate::audit_fail!(
            AuditAction::ExportFailed,
            e.code(),
            user_id = %user.id
        );
    })
}

async fn run_export(state: &AppState, user: &UserInfo) -> Result<CsvAttachment> {
    let started = Instant::now();

    let items = state.catalog.fetch_published_items().await?;

    if let Some(max) = state.export.max_items
        && items.len() > max
    {
        return Err(ApiError::ExportTooLarge {
            count: items.len(),
            max,
        });
    }

    let document = build_document(&items)?;
    let rows = document.row_count();
    let columns = document.column_count();

    let body = match &state.export.delivery {
        Delivery::Memory => document.into_bytes(),
        Delivery::Spool { dir } => delivery::spool(document, dir.clone()).await?,
    };

    crate::audit!(
        AuditAction::ExportProducts,
        user_id = %user.id,
        rows,
        columns,
        bytes = body.len(),
        status = "success"
    );

    info!(
        catalog = state.catalog.name(),
        rows,
        columns,
        bytes = body.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "catalog exported"
    );

    Ok(CsvAttachment::new(&state.export.filename, body))
}
