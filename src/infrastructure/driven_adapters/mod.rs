//! Driven Adapters
//!
//! Implementations of gateway traits and external concerns:
//! - Registry-backed network catalog
//! - Configuration

pub mod config;
pub mod static_catalog;

pub use config::AppConfig;
pub use static_catalog::StaticNetworkCatalog;
