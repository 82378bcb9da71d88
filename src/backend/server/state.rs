/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction, so handlers can ask for just
 * the database pool or the auth engine.
 *
 * # Thread Safety
 *
 * Every field is cheap to clone and safe to share: the pool is internally
 * synchronised, the auth engine and configuration are immutable.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::AuthEngine;
use crate::shared::AppConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,
    /// Token and password engine
    pub auth: AuthEngine,
    /// Process-wide configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, auth: AuthEngine, config: AppConfig) -> Self {
        Self {
            db_pool,
            auth,
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for AuthEngine {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
