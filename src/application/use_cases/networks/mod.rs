//! Network Use Cases
//!
//! Lookups over the network identity registry.

mod get_known_networks;
mod get_network_by_hrp;
mod resolve_network;

pub use get_known_networks::{GetKnownNetworksUseCase, GetProductionNetworksUseCase};
pub use get_network_by_hrp::GetNetworkByHrpUseCase;
pub use resolve_network::ResolveNetworkUseCase;
