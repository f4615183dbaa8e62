//! Playground server binary entry point.

use anyhow::Result;
use sql_playground::config::ServerConfig;
use sql_playground::database::seed_if_missing;
use sql_playground::server::{router, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let config = ServerConfig::builder().from_env()?.build()?;

    seed_if_missing(&config.database.path, &config.database.seed_path)?;

    let bind = config.bind;
    let state = Arc::new(AppState::new(config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(%bind, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sql_playground=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
