/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers. Every
 * variant maps to a status code and a client-safe message; details of
 * server-side failures are logged, never returned.
 *
 * # Error Categories
 *
 * - `HandlerError` - request-level failures with an explicit status
 * - `NotFound` - a referenced resource does not exist
 * - `Auth` - credential and token failures from the auth engine
 * - `Validation` - payload validation failures
 * - `Database` - query failures
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::error::{AuthError, TokenError, UnauthorizedReason};
use crate::shared::SharedError;

/// Generic message for every credential or token failure except expiry
pub const CREDENTIALS_MESSAGE: &str = "Could not validate credentials";

/// Message telling the client to log in again
pub const EXPIRED_MESSAGE: &str = "Token has expired";

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use social_media_api::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// let err = BackendError::not_found("Post");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Referenced resource does not exist
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Authentication failure or auth infrastructure error
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Payload validation error
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - credential and token failures - 401 Unauthorized
    /// - validation - 400 Bad Request
    /// - not found - 404 Not Found
    /// - database and auth infrastructure - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Auth(err) if err.is_client_error() => StatusCode::UNAUTHORIZED,
            Self::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::NotFound { .. } => self.to_string(),
            Self::Auth(err) => auth_message(err).to_string(),
            Self::Validation(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::Database(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}

fn auth_message(err: &AuthError) -> &'static str {
    match err {
        AuthError::Unauthorized {
            reason: UnauthorizedReason::Expired,
        }
        | AuthError::Token(TokenError::TokenExpired) => EXPIRED_MESSAGE,
        AuthError::InvalidCredentials
        | AuthError::Unauthorized {
            reason: UnauthorizedReason::InvalidToken,
        }
        | AuthError::Token(_) => CREDENTIALS_MESSAGE,
        AuthError::Database(_)
        | AuthError::Hashing(_)
        | AuthError::Encoding(_)
        | AuthError::Task(_) => INTERNAL_MESSAGE,
    }
}
