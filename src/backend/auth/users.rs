/**
 * User Model and Database Operations
 *
 * This module handles user records and the queries against the `users`
 * table. The auth engine only ever reads through [`get_user_by_email`].
 */

use sqlx::SqlitePool;

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Store-assigned user ID
    pub id: i64,
    /// User email address (unique, case-sensitive)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Set once the email confirmation link has been followed
    pub confirmed: bool,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error (a duplicate email violates the unique index)
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, confirmed)
        VALUES (?, ?, FALSE)
        RETURNING id, email, password_hash, confirmed
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email, matched exactly
///
/// # Returns
/// User or None if not found. Query failures are returned as errors, never
/// as `None`.
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, confirmed
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Mark a user's email address as confirmed
///
/// # Returns
/// `false` if no user has this email
pub async fn confirm_user(pool: &SqlitePool, email: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET confirmed = TRUE
        WHERE email = ?
        "#,
    )
    .bind(email)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
