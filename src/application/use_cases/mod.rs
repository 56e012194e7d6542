//! Use Cases
//!
//! Application-specific rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod networks;

pub use networks::{
    GetKnownNetworksUseCase, GetNetworkByHrpUseCase, GetProductionNetworksUseCase,
    ResolveNetworkUseCase,
};
