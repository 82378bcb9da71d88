//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /token - Exchange credentials for an access token
//! - **`confirm_email`** - GET /confirm/{token} - Email confirmation
//! - **`get_me`** - GET /me - Current user info

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Email confirmation and current-user handlers
pub mod confirm;

pub use types::{DetailResponse, RegisterResponse, TokenResponse, UserIn, UserResponse};

pub use confirm::{confirm_email, get_me};
pub use login::login;
pub use register::register;
