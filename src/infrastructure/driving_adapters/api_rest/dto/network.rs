//! Network DTOs
//!
//! Response bodies for the network and denomination endpoints.

use serde::Serialize;

use crate::domain::models::ids::Id;
use crate::domain::models::network::NetworkInfo;

/// Network description returned by every network endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponseDto {
    pub id: u32,
    pub name: String,
    pub hrp: String,
    pub well_known: bool,
    pub production: bool,
}

impl From<NetworkInfo> for NetworkResponseDto {
    fn from(info: NetworkInfo) -> Self {
        Self {
            id: info.id(),
            name: info.name().to_string(),
            hrp: info.hrp().to_string(),
            well_known: info.well_known(),
            production: info.production(),
        }
    }
}

/// A named unit of value
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenominationDto {
    pub name: &'static str,
    pub value: u64,
}

/// The network this node is configured for, plus the reserved sentinel IDs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfoDto {
    pub network: NetworkResponseDto,
    pub primary_network_id: Id,
    pub platform_chain_id: Id,
}
