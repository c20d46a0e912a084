//! API server startup
//!
//! Wires configuration into the export API and binds it.
//! Configurable via `[api_server]`, `[auth]`, `[catalog]` and `[export]`.

use std::sync::Arc;

use anyhow::{Context, Result};
use tally_api::{AppState, Delivery, ExportSettings, RouterOptions, build_router_with_options};
use tally_auth::{AuthProvider, LocalJwtProvider};
use tally_catalog::JsonFileCatalog;
use tally_config::{Config, DeliveryMode};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Build application state from configuration
pub fn build_state(config: &Config) -> Result<AppState> {
    let auth = init_auth(config)?;

    let catalog_path = &config.catalog.path;
    if !catalog_path.exists() {
        warn!(
            path = %catalog_path.display(),
            "catalog file not found, exports will fail until it exists"
        );
    }
    let catalog = Arc::new(JsonFileCatalog::new(catalog_path));

    let export = export_settings(config)?;

    Ok(AppState::new(auth, catalog).with_export_settings(export))
}

/// Start the API server
///
/// Stops accepting connections once `cancel` fires and lets in-flight
/// exports finish.
pub async fn start_api_server(config: &Config, cancel: CancellationToken) -> Result<JoinHandle<()>> {
    let api_config = &config.api_server;

    let state = build_state(config)?;

    let router_options = RouterOptions {
        audit_logging: api_config.audit_logging,
    };

    let app = build_router_with_options(state, router_options)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = api_config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind API server to {}", addr))?;

    info!(
        addr = %addr,
        audit_logging = api_config.audit_logging,
        catalog = %config.catalog.path.display(),
        delivery = config.export.delivery.as_str(),
        "API server listening"
    );

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                cancel.cancelled().await;
            })
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, "API server error");
            });
    });

    Ok(handle)
}

/// Initialize authentication; the server refuses to start without a secret
fn init_auth(config: &Config) -> Result<Arc<dyn AuthProvider>> {
    let secret = config
        .require_jwt_secret()
        .context("serving exports requires [auth] jwt_secret")?;

    let provider = match &config.auth.issuer {
        Some(issuer) => LocalJwtProvider::new(secret).with_issuer(issuer),
        None => LocalJwtProvider::new(secret),
    };

    Ok(Arc::new(provider))
}

/// Map `[export]` onto handler settings, preparing the spool directory
fn export_settings(config: &Config) -> Result<ExportSettings> {
    let export = &config.export;

    let delivery = match export.delivery {
        DeliveryMode::Memory => Delivery::Memory,
        DeliveryMode::Spool => {
            let dir = export.spool_dir();
            std::fs::create_dir_all(&dir).with_context(|| {
                format!("failed to create spool directory {}", dir.display())
            })?;
            Delivery::Spool { dir }
        }
    };

    Ok(ExportSettings {
        filename: export.filename.clone(),
        delivery,
        max_items: export.max_items,
    })
}
