//! Tally - Authentication
//!
//! Identity and authorization primitives for the export API.
//!
//! # Overview
//!
//! Store staff authenticate with signed JWT tokens:
//! ```text
//! tally_eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...
//! ```
//! - Contains user ID, email, role and optional explicit permissions
//! - Validated by an [`AuthProvider`] (HMAC-SHA256 locally)
//!
//! | Role | Capabilities |
//! |------|--------------|
//! | `Viewer` | Browse the catalog |
//! | `Editor` | Edit products |
//! | `Manager` | Export the catalog |
//! | `Owner` | Manage the store |

mod claims;
mod error;
mod provider;
mod roles;
mod user;

/// Test utilities for generating JWT tokens
pub mod test_utils;

pub use claims::{TOKEN_PREFIX, TokenClaims, extract_jwt, is_api_token_format};
pub use error::{AuthError, Result};
pub use provider::{AuthProvider, LocalJwtProvider};
pub use roles::{Permission, Role};
pub use user::UserInfo;
