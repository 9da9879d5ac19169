use sg_config::{Config, DatabaseTarget};
use sg_server::{AppState, build_router, logger};

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Ignoring unreadable .env file: {}", e);
    }

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure log directory exists when logging to a file
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        log_file_path,
        config.logging.colored,
    )?;

    info!("Starting sg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let pool = match config.database_target()? {
        DatabaseTarget::File(path) => sg_db::create_pool(&path).await?,
        DatabaseTarget::Url(url) => sg_db::create_pool_from_url(&url).await?,
    };
    info!("Database connection established");

    sg_db::run_migrations(&pool).await?;

    // Build router
    let app = build_router(AppState::new(pool.clone()), &config.cors);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
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
            warn!("Server will run until killed");
            std::future::pending::<()>().await;
        }
    }
}
