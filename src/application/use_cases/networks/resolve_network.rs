//! Resolve Network Use Case
//!
//! Turns a network name, `network-<id>` name or bare decimal ID into a
//! network description.

use std::sync::Arc;

use crate::domain::gateways::NetworkCatalog;
use crate::domain::models::network::NetworkInfo;
use crate::shared::errors::UseCaseError;

/// Use case for resolving free-form text to a network
pub struct ResolveNetworkUseCase {
    network_catalog: Arc<dyn NetworkCatalog>,
}

impl ResolveNetworkUseCase {
    /// Create a new ResolveNetworkUseCase
    #[must_use]
    pub fn new(network_catalog: Arc<dyn NetworkCatalog>) -> Self {
        Self { network_catalog }
    }

    /// Execute the use case
    ///
    /// Numeric IDs outside the well-known set resolve successfully and are
    /// described with a synthesized name and the fallback HRP.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Parse` if the text is neither a known name nor a
    /// 32-bit unsigned decimal.
    pub fn execute(&self, network_name: &str) -> Result<NetworkInfo, UseCaseError> {
        tracing::debug!(input = %network_name, "Resolving network");

        let network_id = self
            .network_catalog
            .resolve(network_name)
            .inspect_err(|_| tracing::warn!(input = %network_name, "Unrecognized network name"))?;

        let info = self.network_catalog.info_for(network_id);
        tracing::debug!(network_id, name = %info.name(), well_known = info.well_known(), "Network resolved");
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::network::NETWORK_REGISTRY;
    use crate::shared::errors::ParseNetworkNameError;
    use std::sync::Mutex;

    struct MockNetworkCatalog {
        resolve_result: Mutex<Option<Result<u32, ParseNetworkNameError>>>,
    }

    impl MockNetworkCatalog {
        fn new() -> Self {
            Self {
                resolve_result: Mutex::new(None),
            }
        }

        fn with_resolve(self, result: Result<u32, ParseNetworkNameError>) -> Self {
            *self.resolve_result.lock().unwrap() = Some(result);
            self
        }
    }

    impl NetworkCatalog for MockNetworkCatalog {
        fn info_for(&self, network_id: u32) -> NetworkInfo {
            NetworkInfo::from_registry(&NETWORK_REGISTRY, network_id)
        }

        fn resolve(&self, network_name: &str) -> Result<u32, ParseNetworkNameError> {
            self.resolve_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(ParseNetworkNameError::new(network_name)))
        }

        fn id_for_hrp(&self, _hrp: &str) -> Option<u32> {
            None
        }

        fn known_ids(&self) -> Vec<u32> {
            vec![]
        }
    }

    #[test]
    fn should_describe_resolved_well_known_network() {
        let catalog = Arc::new(MockNetworkCatalog::new().with_resolve(Ok(5)));

        let use_case = ResolveNetworkUseCase::new(catalog);
        let info = use_case.execute("FUJI").unwrap();

        assert_eq!(info.id(), 5);
        assert_eq!(info.name(), "fuji");
        assert!(info.production());
    }

    #[test]
    fn should_describe_custom_network() {
        let catalog = Arc::new(MockNetworkCatalog::new().with_resolve(Ok(31337)));

        let use_case = ResolveNetworkUseCase::new(catalog);
        let info = use_case.execute("network-31337").unwrap();

        assert_eq!(info.name(), "network-31337");
        assert_eq!(info.hrp(), "custom");
        assert!(!info.well_known());
    }

    #[test]
    fn should_return_parse_error_with_original_input() {
        let catalog = Arc::new(MockNetworkCatalog::new());

        let use_case = ResolveNetworkUseCase::new(catalog);
        let result = use_case.execute("Network-ABC");

        match result {
            Err(UseCaseError::Parse(err)) => assert_eq!(err.input(), "Network-ABC"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
