//! HTTP surface of the campus router for the map UI.
//!
//! | Endpoint | Response |
//! |----------|----------|
//! | `GET /api/route?from=&to=` | waypoints between two buildings, empty when either is unknown |
//! | `GET /api/route.geojson?from=&to=` | the same route as a `GeoJSON` feature with length and connectivity |
//! | `GET /api/areas` | building bounding boxes |
//! | `GET /api/network` | walkway network statistics |
//! | `GET /health` | liveness |

use std::sync::Arc;
use std::time::Duration;

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    routing::get,
};
use campusnav::{BuildingDirectory, CampusRouter, JsonFileDirectory};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod config;
pub mod error;
pub mod routes;

use config::{Config, ServerConfig};
use error::ServerError;
use routes::{
    areas_handler, health_handler, network_handler, route_geojson_handler, route_handler,
};

/// Builds the HTTP application around a shared router
pub fn app<D: BuildingDirectory + 'static>(
    router: Arc<CampusRouter<D>>,
    config: &ServerConfig,
) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/route", get(route_handler::<D>))
        .route("/api/route.geojson", get(route_geojson_handler::<D>))
        .route("/api/areas", get(areas_handler))
        .route("/api/network", get(network_handler::<D>))
        .route("/health", get(health_handler))
        .with_state(router)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .concurrency_limit(config.concurrency_limit),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, String) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled internal error: {err}"),
        )
    }
}

/// Runs the server until Ctrl-C
///
/// # Errors
///
/// Returns an error if the router cannot be configured or the listener
/// cannot be bound.
pub async fn start_server(config: Config) -> Result<(), ServerError> {
    info!("Initializing router...");
    let directory = JsonFileDirectory::new(&config.directory.buildings_path);
    let router = Arc::new(CampusRouter::with_path_data(
        campusnav::CAMPUS_WALKWAYS,
        config.network,
        directory,
    )?);

    // Build the walkway network before accepting traffic
    info!("Walkway network: {}", router.network().network_info());

    let listener = TcpListener::bind(config.server.bind).await?;
    info!("Listening on {}", config.server.bind);

    axum::serve(listener, app(router, &config.server))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
    }
}
