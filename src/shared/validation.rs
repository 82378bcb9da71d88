//! Request payload validation
//!
//! Cheap structural checks applied before anything touches the database.

use crate::shared::error::SharedError;

/// Longest accepted post or comment body, in characters
pub const MAX_BODY_CHARS: usize = 10_000;

/// bcrypt only reads this many bytes of a password
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Basic email shape check: one `@` with a non-empty local part and a
/// domain containing a dot.
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| SharedError::validation("email", "Invalid email format"))?;

    if local.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || email.chars().any(char::is_whitespace)
    {
        return Err(SharedError::validation("email", "Invalid email format"));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.is_empty() {
        return Err(SharedError::validation("password", "Password must not be empty"));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            "Password must be at most 72 bytes",
        ));
    }
    Ok(())
}

/// Post and comment bodies must contain text and stay under [`MAX_BODY_CHARS`]
pub fn validate_body(body: &str) -> Result<(), SharedError> {
    if body.trim().is_empty() {
        return Err(SharedError::validation("body", "Body must not be empty"));
    }
    if body.chars().count() > MAX_BODY_CHARS {
        return Err(SharedError::validation("body", "Body is too long"));
    }
    Ok(())
}
