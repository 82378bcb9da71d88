/**
 * Social Media API Server Entry Point
 *
 * Loads configuration from the environment (and `.env`), installs tracing,
 * builds the application and serves it until Ctrl-C.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use social_media_api::backend::logging::init_tracing;
    use social_media_api::backend::server::init::create_app;
    use social_media_api::shared::AppConfig;

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[STARTUP] Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.env_state);
    tracing::info!("Server initialization started");

    let port = config.server_port;
    let app = create_app(config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(feature = "ssr")]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Could not listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin social-media-api-server --features ssr");
    std::process::exit(1);
}
