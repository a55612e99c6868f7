mod model;
mod server;

use std::net::SocketAddr;

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState, wom::WomClient,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let wom = WomClient::new(http_client, config.wom_api_url.clone());

    let state = AppState::new(db, wom, config.api_token.clone());
    let app = router::router(&config, state)?;

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.listen_addr, e))
        })?;

    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
