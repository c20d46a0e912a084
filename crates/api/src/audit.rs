//! Audit logging middleware
//!
//! Records who exported the catalog and who was turned away.
//!
//! # Output
//!
//! Uses `tracing` with target `audit`. Route that target to a file or a SIEM
//! through the subscriber configuration.
//!
//! # Example log entry
//!
//! ```json
//! {
//!   "level": "INFO",
//!   "target": "audit",
//!   "action": "export.products",
//!   "user_id": "user_123",
//!   "rows": 1200,
//!   "client_ip": "192.168.1.1",
//!   "status": "success"
//! }
//! ```

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::{Instrument, warn};

/// Audit event action types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    /// Catalog export delivered
    ExportProducts,
    /// Authenticated caller lacked the export permission
    ExportDenied,
    /// Export started but could not be completed
    ExportFailed,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExportProducts => "export.products",
            Self::ExportDenied => "export.denied",
            Self::ExportFailed => "export.failed",
        }
    }
}

/// Log an audit event (call from handlers for business-level events)
#[macro_export]
macro_rules! audit {
    ($action:expr, $($field:tt)*) => {
        tracing::info!(
            target: "audit",
            action = $action.as_str(),
            $($field)*
        )
    };
}

/// Log a failed audit event
#[macro_export]
macro_rules! audit_fail {
    ($action:expr, $reason:expr, $($field:tt)*) => {
        tracing::warn!(
            target: "audit",
            action = $action.as_str(),
            status = "failure",
            reason = $reason,
            $($field)*
        )
    };
}

/// Middleware that adds audit context to all requests
///
/// Adds a tracing span with:
/// - Request method and path
/// - Client IP address (from X-Forwarded-For or X-Real-IP headers)
///
/// Handlers then use the `audit!` macro to log specific events.
pub async fn audit_layer(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let client_ip = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .or_else(|| {
            request
                .headers()
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| "unknown".to_string());

    let span = tracing::info_span!(
        target: "audit",
        "request",
        method = %method,
        path = %path,
        client_ip = %client_ip,
    );

    async move {
        let response = next.run(request).await;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            warn!(
                target: "audit",
                status = %status.as_u16(),
                "request_completed"
            );
        }

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_strings() {
        assert_eq!(AuditAction::ExportProducts.as_str(), "export.products");
        assert_eq!(AuditAction::ExportDenied.as_str(), "export.denied");
        assert_eq!(AuditAction::ExportFailed.as_str(), "export.failed");
    }
}
