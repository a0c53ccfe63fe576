//! Spendwise API Server
//!
//! Main entry point for the Spendwise backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendwise_api::{AppState, create_router};
use spendwise_shared::{AppConfig, JwtService, TokenConfig};
use spendwise_store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendwise=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Create JWT service
    let jwt_service = JwtService::new(TokenConfig {
        secret: config.jwt.secret.clone(),
        expires_days: config.jwt.token_expiry_days,
    });

    // Create application state around a fresh document store
    let state = AppState {
        store: MemoryStore::new(),
        jwt_service: Arc::new(jwt_service),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
