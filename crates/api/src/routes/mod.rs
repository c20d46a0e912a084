//! API routes

pub mod export;
pub mod ops;

use axum::{Router, middleware};

use crate::audit::audit_layer;
use crate::state::AppState;

/// Options for building the router
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Enable audit logging middleware
    pub audit_logging: bool,
}

/// Build the complete API router
pub fn build_router(state: AppState) -> Router {
    build_router_with_options(state, RouterOptions::default())
}

/// Build the complete API router with options
pub fn build_router_with_options(state: AppState, options: RouterOptions) -> Router {
    let router = Router::new()
        // Operations routes (health - no auth)
        .merge(ops::routes())
        .nest("/api/v1/export", export::routes());

    let router = if options.audit_logging {
        router.layer(middleware::from_fn(audit_layer))
    } else {
        router
    };

    router.with_state(state)
}
