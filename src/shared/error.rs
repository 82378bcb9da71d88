//! Shared Error Types
//!
//! This module defines error types for failures that do not depend on the
//! server runtime, such as request payload validation.
//!
//! # Usage
//!
//! ```rust
//! use social_media_api::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Invalid email format");
//! ```
use thiserror::Error;

/// Errors shared between the request models and the backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
