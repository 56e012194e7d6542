//! Domain Layer
//!
//! The network identity registry, sentinel identifiers, denominations and
//! gateway traits (ports). This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::network_catalog::NetworkCatalog;
pub use models::network::{NetworkDescriptor, NetworkInfo, NetworkRegistry};
