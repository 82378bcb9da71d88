/**
 * Email Confirmation and Current User Handlers
 *
 * - GET /confirm/{token} marks the token's subject as confirmed. Only
 *   confirmation tokens are accepted.
 * - GET /me returns the user resolved from the bearer token.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::engine::AuthEngine;
use crate::backend::auth::error::{AuthError, UnauthorizedReason};
use crate::backend::auth::handlers::types::{DetailResponse, UserResponse};
use crate::backend::auth::sessions::TokenType;
use crate::backend::auth::users::confirm_user;
use crate::backend::error::BackendError;
use crate::backend::logging::obfuscate_email;
use crate::backend::middleware::AuthUser;

/// Confirm email handler
///
/// # Errors
///
/// * `401 Unauthorized` - Invalid or wrong-type token, or the account is gone
///   ("Token has expired" for expired links)
pub async fn confirm_email(
    State(pool): State<SqlitePool>,
    State(engine): State<AuthEngine>,
    Path(token): Path<String>,
) -> Result<Json<DetailResponse>, BackendError> {
    let email = engine
        .subject_for_token_type(&token, TokenType::Confirmation)
        .map_err(AuthError::from)?;

    if !confirm_user(&pool, &email).await? {
        tracing::warn!(email = %obfuscate_email(&email), "Confirmation for unknown account");
        return Err(AuthError::unauthorized(UnauthorizedReason::InvalidToken).into());
    }

    tracing::info!(email = %obfuscate_email(&email), "User confirmed");
    Ok(Json(DetailResponse::new("User Confirmed")))
}

/// Get current user handler
pub async fn get_me(AuthUser(user): AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
