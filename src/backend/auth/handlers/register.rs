/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate email format and password presence
 * 2. Reject an email that is already registered
 * 3. Hash password using bcrypt (on the blocking pool)
 * 4. Create user in database
 * 5. Return a confirmation link carrying a confirmation token
 */

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::engine::AuthEngine;
use crate::backend::auth::handlers::types::{RegisterResponse, UserIn};
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::BackendError;
use crate::backend::logging::obfuscate_email;
use crate::shared::validation::{validate_email, validate_password};

const DUPLICATE_EMAIL_MESSAGE: &str = "A user with this email already exists";

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid email, empty password, or email already registered
/// * `500 Internal Server Error` - Hashing, database or token failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "1234"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "detail": "User created, please confirm your email.",
///   "confirmation_url": "http://localhost:8000/confirm/eyJhbGciOi..."
/// }
/// ```
pub async fn register(
    State(pool): State<SqlitePool>,
    State(engine): State<AuthEngine>,
    headers: HeaderMap,
    Json(request): Json<UserIn>,
) -> Result<(StatusCode, Json<RegisterResponse>), BackendError> {
    validate_email(&request.email)?;
    validate_password(&request.password)?;

    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!(email = %obfuscate_email(&request.email), "Email already registered");
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            DUPLICATE_EMAIL_MESSAGE,
        ));
    }

    let password_hash = engine.hash_password(&request.password).await?;

    let user = create_user(&pool, &request.email, &password_hash)
        .await
        .map_err(|e| {
            // Lost a race with a concurrent registration
            let duplicate = e
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation());
            if duplicate {
                BackendError::handler(StatusCode::BAD_REQUEST, DUPLICATE_EMAIL_MESSAGE)
            } else {
                BackendError::from(e)
            }
        })?;

    let token = engine.create_confirmation_token(&user.email)?;
    tracing::info!(email = %obfuscate_email(&user.email), user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            detail: "User created, please confirm your email.".to_string(),
            confirmation_url: confirmation_url(&headers, &token),
        }),
    ))
}

/// Absolute confirmation link built from the request's host
fn confirmation_url(headers: &HeaderMap, token: &str) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|h| h.to_str().ok())
        .filter(|proto| *proto == "https")
        .unwrap_or("http");
    format!("{scheme}://{host}/confirm/{token}")
}
