//! Network Identity Registry - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use network_identity_registry::domain::models::network::{hrp, is_production, network_name};
use network_identity_registry::infrastructure::driven_adapters::config::AppConfig;
use network_identity_registry::infrastructure::driven_adapters::static_catalog::StaticNetworkCatalog;
use network_identity_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "network_identity_registry=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    let network_id = config.network.id;
    tracing::info!(
        network_id,
        name = %network_name(network_id),
        hrp = hrp(network_id),
        production = is_production(network_id),
        "Configuration loaded successfully"
    );

    // Create application state
    let network_catalog = Arc::new(StaticNetworkCatalog::default());
    let app_state = AppState::new(Arc::new(config.clone()), network_catalog);

    // Build router
    let app = api_rest::router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
