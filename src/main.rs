mod config;
mod db;
mod plan;
mod routes;
mod services;
mod state;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("loading plan: {0}")]
    Plan(#[from] services::plan::PlanError),
    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Load .env before the subscriber so RUST_LOG can come from it.
    let dotenv = dotenvy::dotenv();
    init_tracing();
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, ".env file could not be read");
        }
    }

    let config = config::ServerConfig::from_env()?;
    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;
    let renderer = plan::export::PlanRenderer::new(config.export_load_system_fonts);
    let state = state::AppState::new(pool, renderer);

    let summary = services::plan::load_plan(&state).await?;
    info!(seeded = summary.seeded, rooms = summary.rooms, "floor plan loaded");

    // Spawn background persistence task.
    let persistence = services::persistence::spawn_persistence_task(state.clone(), config.room_flush_interval_ms);

    let app = routes::app(state.clone(), &config.static_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, static_dir = %config.static_dir.display(), "floorplanner listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    persistence.abort();
    services::persistence::flush_all_dirty(&state).await;
    info!("floorplanner stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("floorplanner=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
