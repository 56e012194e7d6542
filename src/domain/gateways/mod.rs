//! Gateway Traits (Ports)
//!
//! Abstract interfaces the use cases depend on.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod network_catalog;

pub use network_catalog::NetworkCatalog;
