use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;

use bhasha_relay::config::Config;
use bhasha_relay::routes;
use bhasha_relay::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("bhasha_relay=debug,tower_http=debug")
        .init();

    let config = Config::from_env();
    info!("Using model: {}", config.model);
    info!(
        "API key: {}",
        if config.api_key.is_empty() {
            "not configured"
        } else {
            "configured"
        }
    );

    let app_state = AppState::new(config.clone())?;

    // Build application
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
