//! Prometheus text exposition.
//!
//! # Responsibilities
//! - Render a registry in the Prometheus text format
//! - Serve `GET /metrics` for external scrapers
//!
//! # Design Decisions
//! - The exporter takes the registry by value (registries are handles
//!   over shared state), so any number of scrapers see live values
//! - Shutdown is a caller-supplied future, keeping the exporter usable
//!   from binaries (Ctrl+C) and tests (a oneshot channel) alike

use std::future::Future;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use prometheus::{Registry, TextEncoder};
use tokio::net::TcpListener;

/// Render `registry` in the Prometheus text exposition format.
pub fn render(registry: &Registry) -> Result<String, prometheus::Error> {
    TextEncoder::new().encode_to_string(&registry.gather())
}

/// Serve `GET /metrics` on `listener` until `shutdown` resolves.
pub async fn serve(
    registry: Registry,
    listener: TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "Metrics exporter starting");

    let app = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(registry);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Metrics exporter stopped");
    Ok(())
}

async fn metrics_handler(State(registry): State<Registry>) -> impl IntoResponse {
    match render(&registry) {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
