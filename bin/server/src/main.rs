mod auth;
mod config;
mod constants;
mod handlers;
mod state;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use config::ServerConfig;
use state::AppState;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing with env filter
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting posts server (PID: {})", std::process::id());

    let config = ServerConfig::load()?;

    match config.storage_type {
        config::StorageType::Memory => info!("Using in-memory storage"),
        config::StorageType::Database => info!("Using SQLite storage"),
    }

    // A storage failure here aborts the process before any request is served
    let storage = config.storage_backend().initialize().await.map_err(|e| {
        error!("Failed to initialize storage backend: {}", e);
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize storage backend: {}", e),
        )
    })?;
    info!("Storage backend initialized successfully");

    let state = web::Data::new(AppState::new(storage));
    let bind_address = config.bind_address();
    let assets_dir = config.assets_dir.clone();

    info!("Starting server on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(handlers::configure)
            .service(Files::new("/", assets_dir.clone()).index_file("index.html"))
    })
    .bind(&bind_address)
    .map_err(|e| {
        error!("Failed to bind to {}: {}", bind_address, e);
        e
    })?
    .run()
    .await
}
