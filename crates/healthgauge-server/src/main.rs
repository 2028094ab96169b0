//! HealthGauge Server
//!
//! HTTP service scoring free text against a pre-trained mental-health
//! classifier and tabular records against a heart-disease classifier,
//! enriching text predictions with curated articles and playlists.

use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

use healthgauge_server::{AppState, Cli, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    info!("Starting HealthGauge server");

    // Load configuration
    let config = ServerConfig::load(&cli.config, &cli)?;
    info!("Configuration loaded successfully");
    info!("Text model: {}", config.text_model_path.display());
    info!("Tabular model: {}", config.tabular_model_path.display());

    // Initialize metrics
    let metrics_handle = init_metrics()?;

    // Initialize application state (load models and content)
    info!("Initializing application state...");
    let state = AppState::new(config.clone(), metrics_handle)?;
    if !state.models.has_text() {
        warn!("text model unavailable; /predict/mind will answer 500");
    }
    if !state.models.has_tabular() {
        warn!("tabular model unavailable; /predict/body will answer 500");
    }

    // Build and run the server with graceful shutdown
    let addr: SocketAddr = format!("{}:{}", config.listen, config.port).parse()?;
    let app = healthgauge_server::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    warn!("Shutdown signal received, stopping server...");
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("healthgauge=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("healthgauge=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "healthgauge_requests_total",
        "Total number of prediction requests by endpoint"
    );
    metrics::describe_counter!(
        "healthgauge_errors_total",
        "Total number of request failures by kind"
    );
    metrics::describe_histogram!(
        "healthgauge_predict_latency_us",
        metrics::Unit::Microseconds,
        "Prediction latency in microseconds by endpoint"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
