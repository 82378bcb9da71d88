/**
 * Authentication Error Types
 *
 * Closed sets of failure kinds produced by the token and password engine.
 * Route code matches on these exhaustively; `BackendError` turns them into
 * HTTP responses.
 *
 * # Error Categories
 *
 * - `TokenError` - why a presented token was rejected
 * - `AuthError` - outcome of authenticating credentials or a bearer token,
 *   plus the infrastructure failures that must not be mistaken for bad
 *   credentials
 */

use thiserror::Error;

use crate::backend::auth::sessions::TokenType;

/// Token verification failures, in the order they are checked
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed token, bad signature or mismatched algorithm
    #[error("invalid token")]
    InvalidToken,

    /// Signature is valid but the token is past its expiry
    #[error("token has expired")]
    TokenExpired,

    /// Claims carry no subject
    #[error("token is missing a subject")]
    MissingSubject,

    /// Token was issued for a different purpose
    #[error("expected a {expected} token")]
    WrongTokenType {
        expected: TokenType,
        /// Raw `type` claim, `None` when absent
        found: Option<String>,
    },
}

/// Why a bearer token did not resolve to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedReason {
    /// Client must log in again
    Expired,
    /// Any other token failure, or the subject no longer exists
    InvalidToken,
}

/// Outcome of credential or bearer-token authentication
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password, deliberately indistinguishable
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Bearer token did not resolve to an existing user
    #[error("unauthorized")]
    Unauthorized { reason: UnauthorizedReason },

    /// Token rejected outside the current-user path (e.g. confirmation links)
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Store lookup failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// bcrypt refused to hash
    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Token signing failed
    #[error("token encoding failed: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),

    /// Blocking hash task was cancelled or panicked
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AuthError {
    pub fn unauthorized(reason: UnauthorizedReason) -> Self {
        Self::Unauthorized { reason }
    }

    /// True for failures caused by the caller rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::Unauthorized { .. } | Self::Token(_)
        )
    }
}

impl From<TokenError> for UnauthorizedReason {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::TokenExpired => Self::Expired,
            TokenError::InvalidToken
            | TokenError::MissingSubject
            | TokenError::WrongTokenType { .. } => Self::InvalidToken,
        }
    }
}
