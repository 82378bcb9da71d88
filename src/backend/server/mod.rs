//! Server Module
//!
//! Server initialization and configuration.
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Database connection and startup errors
//! - **`init`** - Server initialization and app creation
//! - **`health`** - Database health check

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub mod health;

pub use config::StartupError;
pub use init::create_app;
pub use state::AppState;
