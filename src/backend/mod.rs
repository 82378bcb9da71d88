//! Backend Module
//!
//! All server-side code: an Axum HTTP server backed by SQLite, with JWT
//! bearer authentication, posts with comments and likes, and file uploads.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database setup
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, tokens, user store, auth endpoints
//! - **`middleware`** - The `AuthUser` bearer-token extractor
//! - **`posts`** - Posts, comments and likes
//! - **`upload`** - Streaming file uploads
//! - **`error`** - `BackendError` and its HTTP rendering
//! - **`logging`** - Tracing setup and log masking
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request extractors
//! ├── posts/          - Posts, comments, likes
//! ├── upload/         - File uploads
//! ├── error/          - Error types
//! └── logging.rs      - Tracing setup
//! ```
//!
//! # State Management
//!
//! Handlers share one `AppState` holding the connection pool, the auth
//! engine and the configuration. None of it is mutable after startup, so no
//! locks are involved; the pool synchronises itself.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Every failure maps to a status
//! code and a JSON `{"detail", "status"}` body; authentication failures
//! always answer 401 with `WWW-Authenticate: Bearer`.
//!
//! # Example
//!
//! ```rust,no_run
//! use social_media_api::backend::server::create_app;
//! use social_media_api::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Request extractors
pub mod middleware;

/// Posts, comments and likes
pub mod posts;

/// File uploads
pub mod upload;

/// Backend error types
pub mod error;

/// Tracing setup
pub mod logging;

pub use error::BackendError;
pub use server::create_app;
