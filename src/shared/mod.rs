//! Shared Module
//!
//! Types that do not depend on the server runtime: configuration, payload
//! validation and the errors they produce.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Request payload validation
pub mod validation;

pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, EnvState};
