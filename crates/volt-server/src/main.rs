//! VoltMart API server entry point.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use volt_auth::TokenIssuer;
use volt_server::{router, AppState, Config};
use volt_store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();

    // The store is opened once, before serving, and handed to the router by
    // injection; it lives exactly as long as the process.
    let store = Store::open(&config.store_path).await?;
    let tokens = TokenIssuer::new(&config.jwt_secret);
    let state = AppState::new(store, tokens);

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(port = config.port, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
