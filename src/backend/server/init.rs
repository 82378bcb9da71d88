/**
 * Server Initialization
 *
 * Builds the Axum application from a loaded configuration.
 *
 * # Initialization Process
 *
 * 1. Derive the signing configuration (fatal if invalid)
 * 2. Open the database and run migrations (fatal on failure)
 * 3. Create the upload directory
 * 4. Assemble state and router
 */

use axum::Router;

use crate::backend::auth::{AuthConfig, AuthEngine};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, StartupError};
use crate::backend::server::state::AppState;
use crate::backend::upload::ensure_upload_dir;
use crate::shared::AppConfig;

/// Create and configure the Axum application
pub async fn create_app(config: AppConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing {} ({:?})", config.app_name, config.env_state);

    let auth_config = AuthConfig::from_app_config(&config)?;
    let auth = AuthEngine::new(&auth_config);
    tracing::info!("Token signing configured with {:?}", auth_config.algorithm());

    let db_pool = connect_database(&config.database_url).await?;

    ensure_upload_dir(&config.upload_dir).await?;

    let app_state = AppState::new(db_pool, auth, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
