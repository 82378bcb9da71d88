/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Hashing is deliberately slow, so the
 * async wrappers move the work onto tokio's blocking pool where it cannot
 * stall other requests.
 */

use bcrypt::BcryptError;

use crate::backend::auth::error::AuthError;

/// Hash `plaintext` with a fresh random salt
///
/// Input over 72 bytes is an error rather than silently cut off.
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, BcryptError> {
    bcrypt::non_truncating_hash(plaintext, cost)
}

/// Check `plaintext` against a stored bcrypt hash
///
/// A malformed hash, or input over 72 bytes, is reported as a mismatch.
pub fn verify_password(plaintext: &str, hash: &str) -> bool {
    match bcrypt::non_truncating_verify(plaintext, hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!("Password could not be verified: {}", e);
            false
        }
    }
}

/// [`hash_password`] on the blocking pool
pub async fn hash_password_blocking(plaintext: String, cost: u32) -> Result<String, AuthError> {
    let hash = tokio::task::spawn_blocking(move || hash_password(&plaintext, cost)).await??;
    Ok(hash)
}

/// [`verify_password`] on the blocking pool
pub async fn verify_password_blocking(plaintext: String, hash: String) -> Result<bool, AuthError> {
    let valid = tokio::task::spawn_blocking(move || verify_password(&plaintext, &hash)).await?;
    Ok(valid)
}
