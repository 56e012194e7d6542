//! REST API Module
//!
//! Contains HTTP handlers and DTOs for the read-only REST API.

pub mod dto;
pub mod handlers;

use std::sync::Arc;

use axum::Router;

use crate::application::use_cases::networks::{
    GetKnownNetworksUseCase, GetNetworkByHrpUseCase, GetProductionNetworksUseCase,
    ResolveNetworkUseCase,
};
use crate::domain::gateways::NetworkCatalog;
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub get_known_networks_use_case: Arc<GetKnownNetworksUseCase>,
    pub get_production_networks_use_case: Arc<GetProductionNetworksUseCase>,
    pub resolve_network_use_case: Arc<ResolveNetworkUseCase>,
    pub get_network_by_hrp_use_case: Arc<GetNetworkByHrpUseCase>,
}

impl AppState {
    /// Build every use case over one catalog
    #[must_use]
    pub fn new(config: Arc<AppConfig>, network_catalog: Arc<dyn NetworkCatalog>) -> Self {
        Self {
            config,
            get_known_networks_use_case: Arc::new(GetKnownNetworksUseCase::new(network_catalog.clone())),
            get_production_networks_use_case: Arc::new(GetProductionNetworksUseCase::new(
                network_catalog.clone(),
            )),
            resolve_network_use_case: Arc::new(ResolveNetworkUseCase::new(network_catalog.clone())),
            get_network_by_hrp_use_case: Arc::new(GetNetworkByHrpUseCase::new(network_catalog)),
        }
    }
}

/// Router with every endpoint, before middleware layers
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/networks", handlers::networks::router())
        .merge(handlers::node::router())
        .with_state(state)
}
