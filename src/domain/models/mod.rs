//! Domain Models
//!
//! The network identity registry, well-known identifiers and value denominations.

pub mod ids;
pub mod network;
pub mod units;

pub use ids::{Id, PLATFORM_CHAIN_ID, PRIMARY_NETWORK_ID};
pub use network::{
    hrp, is_production, network_id, network_id_for_hrp, network_name, NetworkDescriptor,
    NetworkInfo, NetworkRegistry, NETWORK_REGISTRY, PRODUCTION_NETWORK_IDS, WELL_KNOWN_NETWORKS,
};
