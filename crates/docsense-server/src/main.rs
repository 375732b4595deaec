//! docsense server
//!
//! Document text analysis API with a remote text analytics provider and a
//! deterministic local fallback.

use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::signal;
use tracing::{info, warn};

use docsense_server::{create_router, AppState, Cli, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    info!("Starting docsense server");

    let config = ServerConfig::load(&cli)?;
    info!("Configuration loaded from {}", cli.config);
    info!(
        "Remote provider enabled: {}",
        config.analysis.use_remote_provider
    );

    let metrics_handle = init_metrics()?;

    let state = AppState::from_config(&config, metrics_handle).await?;
    let app = create_router(state, config.cors_origin()?);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    let shutdown = async {
        shutdown_signal().await;
        warn!("Shutdown signal received, stopping server...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("docsense=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docsense=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Install the Prometheus recorder and return a handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "docsense_analysis_total",
        "Analyses answered, by kind and source"
    );
    metrics::describe_counter!(
        "docsense_fallback_total",
        "Remote analyses replaced by the local result, by kind and reason"
    );
    metrics::describe_histogram!(
        "docsense_analysis_latency_us",
        metrics::Unit::Microseconds,
        "Analysis latency in microseconds by kind"
    );
    metrics::describe_counter!("docsense_documents_total", "Documents analyzed");
    metrics::describe_histogram!(
        "docsense_document_latency_us",
        metrics::Unit::Microseconds,
        "End-to-end document analysis latency in microseconds"
    );
    metrics::describe_counter!("docsense_errors_total", "Rejected requests by status");

    info!("Metrics exporter initialized");
    Ok(handle)
}
