/**
 * Login Handler
 *
 * This module implements POST /token, which exchanges an email and password
 * for an access token.
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 response
 * - Password verification runs on the blocking pool
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::engine::AuthEngine;
use crate::backend::auth::handlers::types::{TokenResponse, UserIn};
use crate::backend::error::BackendError;
use crate::backend::logging::obfuscate_email;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If database query or token generation fails
///
/// # Example Response
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "token_type": "bearer"
/// }
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(engine): State<AuthEngine>,
    Json(request): Json<UserIn>,
) -> Result<Json<TokenResponse>, BackendError> {
    let user = engine
        .authenticate_user(&pool, &request.email, &request.password)
        .await?;

    let access_token = engine.create_access_token(&user.email)?;
    tracing::info!(email = %obfuscate_email(&user.email), "User logged in");

    Ok(Json(TokenResponse::bearer(access_token)))
}
