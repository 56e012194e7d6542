//! Node Handlers
//!
//! Denomination table and node identity endpoints.

use axum::{extract::State, routing::get, Json, Router};

use crate::domain::models::ids::{PLATFORM_CHAIN_ID, PRIMARY_NETWORK_ID};
use crate::domain::models::network::NetworkInfo;
use crate::domain::models::units::DENOMINATIONS;
use crate::infrastructure::driving_adapters::api_rest::dto::network::{
    DenominationDto, NetworkResponseDto, NodeInfoDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;

/// Create the router for node-level endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/units", get(get_units))
        .route("/info", get(get_info))
}

/// GET /units - Value denominations in base units
async fn get_units() -> Json<Vec<DenominationDto>> {
    Json(
        DENOMINATIONS
            .iter()
            .map(|&(name, value)| DenominationDto { name, value })
            .collect(),
    )
}

/// GET /info - Configured network and sentinel IDs
async fn get_info(State(state): State<AppState>) -> Json<NodeInfoDto> {
    let network = NetworkInfo::from(state.config.network.id);
    Json(NodeInfoDto {
        network: NetworkResponseDto::from(network),
        primary_network_id: PRIMARY_NETWORK_ID,
        platform_chain_id: PLATFORM_CHAIN_ID,
    })
}
