//! Server binary: load config, open the database, mount routes, serve.

use gamerack::{app_router, connect, ensure_schema, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gamerack=info")),
        )
        .init();

    tracing::info!(environment = %config.environment, "starting");

    let pool = connect(&config.database_url).await?;
    ensure_schema(&pool).await?;

    let app = app_router(AppState { pool });

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
