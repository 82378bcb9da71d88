/**
 * Authentication Engine
 *
 * Ties password hashing, token handling and the user lookup together. The
 * engine is built once from an `AuthConfig` and cloned into every handler;
 * it holds no mutable state.
 *
 * # Operations
 *
 * - `authenticate_user` - email + password to user record
 * - `resolve_current_user` - bearer token to user record
 * - token issuance and typed subject extraction
 * - password hashing on the blocking pool
 */

use sqlx::SqlitePool;

use crate::backend::auth::error::{AuthError, TokenError, UnauthorizedReason};
use crate::backend::auth::password::{hash_password_blocking, verify_password_blocking};
use crate::backend::auth::sessions::{AuthConfig, SessionTokens, TokenType};
use crate::backend::auth::users::{get_user_by_email, User};
use crate::backend::logging::obfuscate_email;

#[derive(Clone)]
pub struct AuthEngine {
    tokens: SessionTokens,
    bcrypt_cost: u32,
}

impl AuthEngine {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            tokens: SessionTokens::new(config),
            bcrypt_cost: config.bcrypt_cost(),
        }
    }

    /// Hash a password off the async executor
    pub async fn hash_password(&self, plaintext: &str) -> Result<String, AuthError> {
        hash_password_blocking(plaintext.to_string(), self.bcrypt_cost).await
    }

    /// Verify a password off the async executor
    pub async fn verify_password(&self, plaintext: &str, hash: &str) -> Result<bool, AuthError> {
        verify_password_blocking(plaintext.to_string(), hash.to_string()).await
    }

    pub fn create_access_token(&self, email: &str) -> Result<String, AuthError> {
        Ok(self.tokens.create_access_token(email)?)
    }

    pub fn create_confirmation_token(&self, email: &str) -> Result<String, AuthError> {
        Ok(self.tokens.create_confirmation_token(email)?)
    }

    /// Verify `token` and return its subject if it was issued as `expected`
    pub fn subject_for_token_type(
        &self,
        token: &str,
        expected: TokenType,
    ) -> Result<String, TokenError> {
        self.tokens.subject_for_token_type(token, expected)
    }

    /// Authenticate an email/password pair
    ///
    /// An unknown email and a wrong password both produce
    /// [`AuthError::InvalidCredentials`].
    pub async fn authenticate_user(
        &self,
        pool: &SqlitePool,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        tracing::debug!(email = %obfuscate_email(email), "Authenticating user");

        let Some(user) = get_user_by_email(pool, email).await? else {
            tracing::debug!(email = %obfuscate_email(email), "Authentication failed");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.verify_password(password, &user.password_hash).await? {
            tracing::debug!(email = %obfuscate_email(email), "Authentication failed");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Resolve a bearer token to the user it names
    ///
    /// Only access tokens are accepted. Every token failure becomes
    /// [`AuthError::Unauthorized`], with expiry kept as a distinct reason. A
    /// valid token whose user no longer exists is also unauthorized.
    pub async fn resolve_current_user(
        &self,
        pool: &SqlitePool,
        token: &str,
    ) -> Result<User, AuthError> {
        let email = self
            .subject_for_token_type(token, TokenType::Access)
            .map_err(|e| {
                tracing::debug!("Bearer token rejected: {}", e);
                AuthError::unauthorized(UnauthorizedReason::from(e))
            })?;

        get_user_by_email(pool, &email).await?.ok_or_else(|| {
            tracing::warn!(email = %obfuscate_email(&email), "Token subject has no account");
            AuthError::unauthorized(UnauthorizedReason::InvalidToken)
        })
    }
}
