use crate::app::AddressStore;
use crate::handlers::{
    create_address, delete_address, get_address, health, list_addresses, nearby_addresses,
    root, update_address,
};
use axum::{http::Method, routing::get, Router};
use hyper::Server;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Create the HTTP router with all address routes.
pub fn create_server(store: AddressStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/addresses", get(list_addresses).post(create_address))
        .route("/addresses/nearby", get(nearby_addresses))
        .route(
            "/addresses/:id",
            get(get_address).put(update_address).delete(delete_address),
        )
        .with_state(store)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// Serve the router on `addr` until Ctrl-C.
pub async fn start_server(store: AddressStore, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_server(store);

    info!("HTTP server running on http://{addr}");
    info!("Health check: http://{addr}/health");

    Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
