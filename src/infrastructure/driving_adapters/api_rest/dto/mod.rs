//! Data Transfer Objects
//!
//! Response DTOs for the REST API.

pub mod network;

pub use network::{DenominationDto, NetworkResponseDto, NodeInfoDto};
