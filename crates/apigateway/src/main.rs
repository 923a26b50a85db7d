use anyhow::{Context, Result};
use apigateway::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager},
    utils::Logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true")
        .unwrap_or(false);

    Logger::new("withdrawal-gateway", is_dev);

    let config = Config::init().context("Failed to load configuration")?;

    let port = config.port;

    let db = ConnectionManager::new_pool(&config.database_url, config.run_migrations)
        .await
        .context("Failed to connect to database")?;

    let state = AppState::new(db);

    println!("🚀 Server started successfully");

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Ok(())
}
