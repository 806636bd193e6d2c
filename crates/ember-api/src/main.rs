//! Ember API server entrypoint.

use ember_api::{ApiConfig, AppState, create_router};
use ember_secrets::SecretResolver;
use ember_trace::{LogConfig, init_logging};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging(&LogConfig::default())?;

    // The resolver itself is total; a missing signing key is fatal here
    // because the server cannot mint or verify tokens without it.
    let resolver = SecretResolver::with_default_providers();
    let jwt_secret = resolver
        .resolve("jwt_secret_key")
        .await
        .ok_or("jwt_secret_key is not set; export it or create private/jwt_secret_key")?;

    let config = ApiConfig::from_env();
    let app = create_router(AppState::new(jwt_secret.as_bytes()));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
