//! Route Configuration Module
//!
//! - **`router`** - Main router creation, request id and tracing layers
//! - **`api_routes`** - Route groups (auth, posts, upload, health)

/// Main router creation
pub mod router;

/// API route groups
pub mod api_routes;

pub use router::create_router;
