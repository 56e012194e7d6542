//! Get Known Networks Use Cases
//!
//! Lists the well-known networks, optionally only the production ones.

use std::sync::Arc;

use crate::domain::gateways::NetworkCatalog;
use crate::domain::models::network::NetworkInfo;

/// Use case for listing every well-known network
pub struct GetKnownNetworksUseCase {
    network_catalog: Arc<dyn NetworkCatalog>,
}

impl GetKnownNetworksUseCase {
    /// Create a new GetKnownNetworksUseCase
    #[must_use]
    pub fn new(network_catalog: Arc<dyn NetworkCatalog>) -> Self {
        Self { network_catalog }
    }

    /// Execute the use case
    #[must_use]
    pub fn execute(&self) -> Vec<NetworkInfo> {
        tracing::debug!("Getting all well-known networks");

        let networks: Vec<NetworkInfo> = self
            .network_catalog
            .known_ids()
            .into_iter()
            .map(|id| self.network_catalog.info_for(id))
            .collect();

        tracing::debug!(count = networks.len(), "Found well-known networks");
        networks
    }
}

/// Use case for listing the production networks
pub struct GetProductionNetworksUseCase {
    network_catalog: Arc<dyn NetworkCatalog>,
}

impl GetProductionNetworksUseCase {
    /// Create a new GetProductionNetworksUseCase
    #[must_use]
    pub fn new(network_catalog: Arc<dyn NetworkCatalog>) -> Self {
        Self { network_catalog }
    }

    /// Execute the use case
    #[must_use]
    pub fn execute(&self) -> Vec<NetworkInfo> {
        self.network_catalog
            .known_ids()
            .into_iter()
            .map(|id| self.network_catalog.info_for(id))
            .filter(NetworkInfo::production)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::network::NETWORK_REGISTRY;
    use crate::shared::errors::ParseNetworkNameError;

    struct MockNetworkCatalog {
        known_ids: Vec<u32>,
    }

    impl NetworkCatalog for MockNetworkCatalog {
        fn info_for(&self, network_id: u32) -> NetworkInfo {
            NetworkInfo::from_registry(&NETWORK_REGISTRY, network_id)
        }

        fn resolve(&self, network_name: &str) -> Result<u32, ParseNetworkNameError> {
            Err(ParseNetworkNameError::new(network_name))
        }

        fn id_for_hrp(&self, _hrp: &str) -> Option<u32> {
            None
        }

        fn known_ids(&self) -> Vec<u32> {
            self.known_ids.clone()
        }
    }

    #[test]
    fn should_return_empty_list_when_catalog_is_empty() {
        let catalog = Arc::new(MockNetworkCatalog { known_ids: vec![] });

        let use_case = GetKnownNetworksUseCase::new(catalog);

        assert!(use_case.execute().is_empty());
    }

    #[test]
    fn should_return_networks_in_catalog_order() {
        let catalog = Arc::new(MockNetworkCatalog {
            known_ids: vec![12345, 1, 10],
        });

        let use_case = GetKnownNetworksUseCase::new(catalog);
        let names: Vec<String> = use_case
            .execute()
            .iter()
            .map(|n| n.name().to_string())
            .collect();

        assert_eq!(names, vec!["local", "mainnet", "testing"]);
    }

    #[test]
    fn should_keep_only_production_networks() {
        let catalog = Arc::new(MockNetworkCatalog {
            known_ids: vec![1, 5, 10, 12345, 64293],
        });

        let use_case = GetProductionNetworksUseCase::new(catalog);
        let ids: Vec<u32> = use_case.execute().iter().map(NetworkInfo::id).collect();

        assert_eq!(ids, vec![1, 5]);
    }
}
