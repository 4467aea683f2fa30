use ogf_realtime::{FacadeLogger, Hub, ShutdownCoordinator};
use ogf_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A .env file may carry OGF_* overrides in development
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = ogf_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = ogf_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ogf-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let prometheus = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Prometheus exporter unavailable: {}", e);
            None
        }
    };

    let shutdown = ShutdownCoordinator::new();

    // Start the hub loop; it stops when the coordinator fires
    let (hub, hub_loop) = Hub::new(&config.hub, Arc::new(FacadeLogger::default()));
    let hub_task = tokio::spawn(hub_loop.run(shutdown.subscribe_guard()));

    let app_state = AppState {
        hub: hub.clone(),
        shutdown: shutdown.clone(),
        prometheus,
        max_connections: config.server.max_connections,
    };

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Shutdown signal received, draining connections");
        })
        .await?;

    hub_task.await?;
    hub.stopped().await;

    let metrics = hub.metrics();
    info!(
        "Server stopped: {} messages sent, {} dropped, {} connections served",
        metrics.messages_sent, metrics.messages_dropped, metrics.connections_total
    );

    Ok(())
}
