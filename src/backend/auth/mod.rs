//! Authentication Module
//!
//! This module handles password hashing, token issuance and verification,
//! user lookup, and the HTTP handlers for registration, login and email
//! confirmation.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - Typed JWT issuance and verification
//! ├── engine.rs       - Credential and bearer-token authentication
//! ├── error.rs        - Token and authentication failure kinds
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → user created → confirmation link returned
//! 2. **Confirm**: confirmation token → user marked confirmed
//! 3. **Token**: email + password verified → access token returned
//! 4. **Protected routes**: access token → `AuthUser` extractor → user record
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt, off the async executor
//! - Access tokens expire after 30 minutes, confirmation tokens after 24 hours
//! - A token is only accepted by the operation matching its `type` claim
//! - Unknown email and wrong password return the same 401

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Authentication engine
pub mod engine;

/// Authentication error types
pub mod error;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use engine::AuthEngine;
pub use error::{AuthError, TokenError, UnauthorizedReason};
pub use handlers::types::{DetailResponse, RegisterResponse, TokenResponse, UserIn, UserResponse};
pub use handlers::{confirm_email, get_me, login, register};
pub use sessions::{AuthConfig, TokenType};
pub use users::User;
