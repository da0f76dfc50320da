use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Build the router for `cfg` without binding anything.
pub fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let state = AppState::from_config(cfg)?;
    Ok(routes::build_router(state))
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl_c; shutting down");
    }
    info!("shutdown signal received");
}

/// Public entry: serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_until(cfg, shutdown_signal()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg)?;
    let listener = tokio::net::TcpListener::bind(cfg.bind_addr())
        .await
        .map_err(|e| StartupError::Runtime(format!("cannot bind {}: {e}", cfg.bind_addr())))?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "catalog server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("catalog server stopped");
    Ok(())
}
