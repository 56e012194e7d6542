//! Network Handlers
//!
//! Read-only HTTP handlers over the network identity registry.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::network::NetworkResponseDto;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for network endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_known_networks))
        .route("/production", get(get_production_networks))
        .route("/hrp/{hrp}", get(get_network_by_hrp))
        .route("/{network}", get(resolve_network))
}

/// GET /networks - List the well-known networks
///
/// # Responses
///
/// * 200 OK - Well-known networks in registry order
#[axum::debug_handler]
async fn get_known_networks(State(state): State<AppState>) -> Json<Vec<NetworkResponseDto>> {
    let networks = state.get_known_networks_use_case.execute();
    Json(networks.into_iter().map(NetworkResponseDto::from).collect())
}

/// GET /networks/production - List the production networks
///
/// # Responses
///
/// * 200 OK - Production networks in registry order
#[axum::debug_handler]
async fn get_production_networks(State(state): State<AppState>) -> Json<Vec<NetworkResponseDto>> {
    let networks = state.get_production_networks_use_case.execute();
    Json(networks.into_iter().map(NetworkResponseDto::from).collect())
}

/// GET /networks/{network} - Resolve a name, `network-<id>` or numeric ID
///
/// # Responses
///
/// * 200 OK - Network resolved (custom IDs included)
/// * 400 Bad Request - Text is not a known name or a 32-bit unsigned decimal
#[axum::debug_handler]
async fn resolve_network(
    State(state): State<AppState>,
    Path(network): Path<String>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    let info = state.resolve_network_use_case.execute(&network)?;
    Ok(Json(NetworkResponseDto::from(info)))
}

/// GET /networks/hrp/{hrp} - Find the network owning an address HRP
///
/// # Responses
///
/// * 200 OK - Network found
/// * 404 Not Found - No well-known network uses the HRP
#[axum::debug_handler]
async fn get_network_by_hrp(
    State(state): State<AppState>,
    Path(hrp): Path<String>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    let info = state.get_network_by_hrp_use_case.execute(&hrp)?;
    Ok(Json(NetworkResponseDto::from(info)))
}
