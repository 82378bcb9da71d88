/**
 * Authentication Extractor
 *
 * Protects routes that require a logged-in user. The extractor reads the
 * bearer token from the Authorization header, resolves it through the auth
 * engine and hands the user record to the handler.
 *
 * Any failure rejects the request with 401 and `WWW-Authenticate: Bearer`.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sqlx::SqlitePool;

use crate::backend::auth::engine::AuthEngine;
use crate::backend::auth::error::{AuthError, UnauthorizedReason};
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;

/// Axum extractor for the authenticated user
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    SqlitePool: FromRef<S>,
    AuthEngine: FromRef<S>,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            tracing::debug!("Missing or malformed Authorization header");
            AuthError::unauthorized(UnauthorizedReason::InvalidToken)
        })?;

        let pool = SqlitePool::from_ref(state);
        let engine = AuthEngine::from_ref(state);
        let user = engine.resolve_current_user(&pool, token).await?;

        Ok(AuthUser(user))
    }
}

/// Token of a `Bearer` Authorization header
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
