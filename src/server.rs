//! HTTP server initialization and runtime setup.
//!
//! Builds the layout service from configuration and runs the Axum server
//! until Ctrl+C.

use crate::application::services::LayoutService;
use crate::config::Config;
use crate::domain::clock::SystemClock;
use crate::domain::entities::Brand;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the layout service described by `config`, reading the system clock.
pub fn layout_from_config(config: &Config) -> LayoutService {
    LayoutService::new(
        config.nav_variant,
        Brand::new(config.brand_name.clone()),
        config.nav_links.clone(),
        Arc::new(SystemClock),
    )
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let layout = layout_from_config(&config);
    tracing::info!("Layout ready ({} navigation)", layout.variant());

    let state = AppState::new(Arc::new(layout));

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
