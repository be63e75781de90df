mod config;
mod handlers;
mod models;
mod router;

use config::Config;
use models::{APP_TITLE, SERVICE_VERSION};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::var("DEMO_APP_CONFIG").unwrap_or_else(|_| "config.toml".into());
    let cfg = Config::load(&config_path)?
        .with_listen_override(std::env::var("DEMO_APP_LISTEN").ok());
    let addr = cfg.listen_addr()?;

    let app = router::build_router();

    info!(%addr, version = SERVICE_VERSION, "Starting {}", APP_TITLE);
    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
