use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use web_server::{build_router, config::Config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with JSON formatting (configurable via env)
    let use_json = std::env::var("LOG_FORMAT")
        .unwrap_or_else(|_| "text".to_string())
        .eq_ignore_ascii_case("json");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "web_server=info,tower_http=info".into());

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        service = "web-server",
        version = env!("CARGO_PKG_VERSION"),
        log_format = if use_json { "json" } else { "text" },
        "Starting web server"
    );

    let config = Config::load()?;
    tracing::info!(
        default_count = config.flips.default_count,
        max_count = config.flips.max_count,
        seeded = config.flips.seed.is_some(),
        "Configuration loaded"
    );

    let metrics_handle = spawn_metrics_server(config.metrics_port);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    let app = build_router(AppState::new(config));

    tracing::info!("Web server listening on {}", addr);
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /        - Home");
    tracing::info!("  GET  /health  - Health check");
    tracing::info!("  GET  /api/flip?count=100 - Run coin flips");
    tracing::info!("  GET  /api/analyze?count=100 - Analyze coin flips");
    tracing::info!("  GET  /api/compare?trials=50,100,150 - Compare flip series");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server failed: {}", e);
        return Err(e.into());
    }

    metrics_handle.await??;

    Ok(())
}

/// Runs the metrics listener in its own task, logging a failure as soon as it happens
fn spawn_metrics_server(port: u16) -> JoinHandle<anyhow::Result<()>> {
    tokio::spawn(async move {
        let result = start_metrics_server(port).await;
        if let Err(ref e) = result {
            tracing::error!(port, "Metrics server failed: {:#}", e);
        }
        result
    })
}

async fn start_metrics_server(port: u16) -> anyhow::Result<()> {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let handle = builder.install_recorder()?;

    let app = Router::new().route("/metrics", get(|| async move { handle.render() }));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Metrics server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_metrics_task_finishes_with_error_when_port_taken() {
        let taken = tokio::net::TcpListener::bind(("0.0.0.0", 0)).await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let result = spawn_metrics_server(port).await.unwrap();
        assert!(result.is_err());
    }
}
