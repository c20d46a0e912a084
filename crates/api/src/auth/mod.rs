//! Authentication
//!
//! Identity is established from a signed token before any handler logic runs.
//! Whether that identity may export is decided separately by
//! [`crate::authz::ExportAuthorizer`].
//!
//! # Usage
//!
//! ```ignore
//! use tally_api::auth::AuthUser;
//!
//! async fn handler(auth: AuthUser) -> impl IntoResponse {
//!     format!("Hello, {}!", auth.email)
//! }
//! ```

pub mod middleware;

// Re-export core types from tally-auth
pub use tally_auth::{AuthProvider, LocalJwtProvider, Permission, Role, TOKEN_PREFIX, UserInfo};

pub use middleware::{AuthUser, HasAuthProvider, TOKEN_COOKIE, extract_token};
