//! Common test utilities and helpers
//!
//! - Application fixture backed by an in-memory database
//! - Authentication helpers
//! - Response assertions

pub mod assertions;
pub mod database;

pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;
