//! Network Catalog Gateway
//!
//! Read-only contract for looking up network identities.

use crate::domain::models::network::NetworkInfo;
use crate::shared::errors::ParseNetworkNameError;

/// Catalog of network identities
pub trait NetworkCatalog: Send + Sync {
    /// Describe any network ID; unknown IDs get a synthesized name and the fallback HRP
    fn info_for(&self, network_id: u32) -> NetworkInfo;

    /// Resolve a name, `network-<id>` or bare decimal to a network ID
    fn resolve(&self, network_name: &str) -> Result<u32, ParseNetworkNameError>;

    /// Find the well-known network using `hrp`
    fn id_for_hrp(&self, hrp: &str) -> Option<u32>;

    /// IDs of all well-known networks, in table order
    fn known_ids(&self) -> Vec<u32>;
}
