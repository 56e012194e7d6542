//! Static Network Catalog
//!
//! `NetworkCatalog` backed by a fixed `NetworkRegistry`, by default the
//! process-wide one.

use crate::domain::gateways::NetworkCatalog;
use crate::domain::models::network::{NetworkInfo, NetworkRegistry, NETWORK_REGISTRY};
use crate::shared::errors::ParseNetworkNameError;

/// Catalog over an immutable registry
#[derive(Debug, Clone, Copy)]
pub struct StaticNetworkCatalog {
    registry: &'static NetworkRegistry,
}

impl StaticNetworkCatalog {
    #[must_use]
    pub fn new(registry: &'static NetworkRegistry) -> Self {
        Self { registry }
    }
}

impl Default for StaticNetworkCatalog {
    fn default() -> Self {
        Self::new(&NETWORK_REGISTRY)
    }
}

impl NetworkCatalog for StaticNetworkCatalog {
    fn info_for(&self, network_id: u32) -> NetworkInfo {
        NetworkInfo::from_registry(self.registry, network_id)
    }

    fn resolve(&self, network_name: &str) -> Result<u32, ParseNetworkNameError> {
        self.registry.network_id(network_name)
    }

    fn id_for_hrp(&self, hrp: &str) -> Option<u32> {
        self.registry.network_id_for_hrp(hrp)
    }

    fn known_ids(&self) -> Vec<u32> {
        self.registry.descriptors().map(|d| d.id).collect()
    }
}
