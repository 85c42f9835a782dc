//! REST server, router construction and serve loop.

use crate::rest::api;
use crate::sim::fleet::Fleet;
use crate::Config;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build the REST router with a permissive CORS policy.
///
/// The service is meant for open browser consumption, so any origin,
/// method and header must pass. Wildcards cannot be combined with
/// credentials, so the request values are mirrored back instead.
pub fn build_router(fleet: Arc<Fleet>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/couriers", get(api::list_couriers))
        .route("/courier/:id", get(api::get_courier))
        .layer(cors)
        .with_state(fleet)
}

/// The REST server for this service
///
/// `shutdown_rx` lets tests stop the server; when `None`, the server
/// runs until CTRL+C.
pub async fn rest_server(
    config: Config,
    fleet: Arc<Fleet>,
    shutdown_rx: Option<tokio::sync::oneshot::Receiver<()>>,
) -> Result<(), ()> {
    rest_debug!("(rest_server) entry.");

    let rest_port = config.docker_port_rest;
    let full_rest_addr = format!("[::]:{rest_port}");

    let listener = match tokio::net::TcpListener::bind(&full_rest_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            rest_error!("(rest_server) Could not bind to {}: {}.", full_rest_addr, e);
            return Err(());
        }
    };

    rest_info!("(rest_server) Hosted at {}.", full_rest_addr);
    axum::serve(listener, build_router(fleet))
        .with_graceful_shutdown(crate::shutdown_signal("rest", shutdown_rx))
        .await
        .map_err(|e| rest_error!("(rest_server) Could not start server: {}.", e))
}
