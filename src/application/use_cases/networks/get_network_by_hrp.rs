//! Get Network By HRP Use Case
//!
//! Finds the well-known network that owns an address HRP.

use std::sync::Arc;

use crate::domain::gateways::NetworkCatalog;
use crate::domain::models::network::NetworkInfo;
use crate::shared::errors::UseCaseError;

/// Use case for looking up a network by its bech32 HRP
pub struct GetNetworkByHrpUseCase {
    network_catalog: Arc<dyn NetworkCatalog>,
}

impl GetNetworkByHrpUseCase {
    /// Create a new GetNetworkByHrpUseCase
    #[must_use]
    pub fn new(network_catalog: Arc<dyn NetworkCatalog>) -> Self {
        Self { network_catalog }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no well-known network uses `hrp`.
    /// The fallback HRP is never owned by a network.
    pub fn execute(&self, hrp: &str) -> Result<NetworkInfo, UseCaseError> {
        tracing::debug!(hrp = %hrp, "Getting network by HRP");

        let network_id = self.network_catalog.id_for_hrp(hrp).ok_or_else(|| {
            tracing::warn!(hrp = %hrp, "No network uses HRP");
            UseCaseError::NotFound {
                resource: "Network HRP".to_string(),
                id: hrp.to_string(),
            }
        })?;

        Ok(self.network_catalog.info_for(network_id))
    }
}
