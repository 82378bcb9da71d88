/**
 * Router Configuration
 *
 * Combines the route groups into a single Axum router and wraps it in the
 * request tracing layers.
 *
 * # Layers (outermost first)
 *
 * 1. `SetRequestIdLayer` - assigns `x-request-id` when the client sent none
 * 2. `TraceLayer` - one span per request, carrying the request id
 * 3. `PropagateRequestIdLayer` - copies `x-request-id` onto the response
 */

use axum::{body::Body, http::Request, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::backend::routes::api_routes::{
    configure_auth_routes, configure_health_routes, configure_post_routes, configure_upload_routes,
};
use crate::backend::server::state::AppState;
use crate::backend::upload::UPLOADS_PREFIX;

/// Create the Axum router with all routes configured
///
/// Stored uploads are served from the configured upload directory under
/// `/uploads`. Unknown routes fall through to a 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    let config = app_state.config.clone();

    let router = Router::new();
    let router = configure_auth_routes(router);
    let router = configure_post_routes(router);
    let router = configure_upload_routes(router, config.max_upload_bytes);
    let router = configure_health_routes(router);

    router
        .nest_service(UPLOADS_PREFIX, ServeDir::new(&config.upload_dir))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        }))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(app_state)
}
