use uc_server::error::Result as ServerResult;
use uc_server::{AppState, build_router, logger};

use uc_db::PoolSettings;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerResult<()> {
    // Pick up a .env file if present (development)
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = uc_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(log_dir) = path.parent()
    {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting uc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let settings =
        PoolSettings::new(database_path).with_max_connections(config.database.max_connections);
    let pool = uc_db::connect(&settings).await?;
    info!("Database ready");

    let app = build_router(AppState::new(pool.clone()));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
