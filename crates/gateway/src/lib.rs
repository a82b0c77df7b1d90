//! API Gateway Library
//!
//! HTTP REST API over the learning services. Handlers reach the store only
//! through the shared [`learning_service_lib::ServiceContainer`].

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server over the process-wide service container.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let services = learning_service_lib::shared()?;

    let state = AppState::new(Arc::new(services.clone()), config.clone());

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server.addr().parse()?;
    info!(service = %config.server.service_name, "Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Render the catalog as pretty JSON.
pub async fn catalog_json() -> Result<String, Box<dyn std::error::Error>> {
    use learning_service_lib::ServiceContainer;

    let services = learning_service_lib::shared()?;
    let catalog = services.catalog().get_catalog().await?;
    Ok(serde_json::to_string_pretty(&catalog)?)
}
