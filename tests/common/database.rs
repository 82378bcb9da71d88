//! Application and database fixtures
//!
//! Every fixture gets its own in-memory SQLite database and its own
//! temporary upload directory, so tests never share state.

use axum_test::TestServer;
use sqlx::SqlitePool;
use tempfile::TempDir;

use social_media_api::backend::auth::{AuthConfig, AuthEngine};
use social_media_api::backend::routes::create_router;
use social_media_api::backend::server::config::connect_database;
use social_media_api::backend::server::state::AppState;
use social_media_api::shared::{AppConfig, AppConfigBuilder, EnvState};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Running application plus direct handles on its storage
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
    pub engine: AuthEngine,
    pub config: AppConfig,
    upload_dir: TempDir,
}

impl TestApp {
    /// Application with the default test configuration
    pub async fn new() -> Self {
        Self::with_config(|builder| builder).await
    }

    /// Application with a customised configuration
    ///
    /// The closure receives a builder already set up for testing.
    pub async fn with_config(customise: impl FnOnce(AppConfigBuilder) -> AppConfigBuilder) -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");
        let builder = AppConfig::builder()
            .app_name("social-media-api-test")
            .env_state(EnvState::Testing)
            .database_url("sqlite::memory:")
            .jwt_secret(TEST_SECRET)
            .jwt_algorithm("HS256")
            .bcrypt_cost(4)
            .upload_dir(upload_dir.path());
        let config = customise(builder).build().expect("Invalid test config");

        let pool = create_test_pool().await;
        let auth_config = AuthConfig::from_app_config(&config).expect("Invalid auth config");
        let engine = AuthEngine::new(&auth_config);

        let state = AppState::new(pool.clone(), engine.clone(), config.clone());
        let server = TestServer::new(create_router(state)).expect("Failed to start test server");

        Self {
            server,
            pool,
            engine,
            config,
            upload_dir,
        }
    }

    pub fn upload_path(&self) -> &std::path::Path {
        self.upload_dir.path()
    }
}

/// Fresh in-memory database with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    connect_database("sqlite::memory:")
        .await
        .expect("Failed to create test database pool")
}
