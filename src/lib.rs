//! Social Media API - Main Library
//!
//! A small social media backend: users register with email and password,
//! confirm their address through a signed link, and log in for a short-lived
//! bearer token. Authenticated users write posts, comment, like and upload
//! files.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration, validation and error types that do not
//!   depend on the server stack
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, SQLite persistence
//!   - Password hashing and JWT issuance/verification
//!   - Posts, comments, likes and uploads
//!
//! # Feature Flags
//!
//! - **`ssr`** - enables the backend modules (on by default)
//!
//! # Usage
//!
//! ```rust,no_run
//! use social_media_api::backend::server::init::create_app;
//! use social_media_api::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and configuration
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
