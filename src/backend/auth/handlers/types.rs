/**
 * Authentication Handler Types
 *
 * Request and response bodies of the authentication endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Credentials used for both registration and login
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UserIn {
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
}

/// Registration response
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub detail: String,
    /// Link that confirms the registered email address
    pub confirmation_url: String,
}

/// Login response
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Access token (30-minute expiration)
    pub access_token: String,
    /// Always `bearer`
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Plain message response
#[derive(Serialize, Deserialize, Debug)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// User response (without the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub confirmed: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            confirmed: user.confirmed,
        }
    }
}
