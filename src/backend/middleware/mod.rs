//! Middleware Module
//!
//! Request processing shared by the protected routes.
//!
//! - **`auth`** - the [`AuthUser`] extractor, which turns a bearer token into
//!   the user record

pub mod auth;

pub use auth::{bearer_token, AuthUser};
