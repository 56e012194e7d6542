//! Network Identity Registry
//!
//! The fixed set of well-known networks and the lookups between their numeric
//! IDs, names and bech32 human-readable parts (HRPs).

use std::borrow::Cow;
use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::shared::errors::{DomainError, ParseNetworkNameError};

pub const MAINNET_ID: u32 = 1;
pub const FUJI_ID: u32 = 5;

pub const TESTNET_ID: u32 = FUJI_ID;
pub const UNIT_TEST_ID: u32 = 10;
pub const LOCAL_ID: u32 = 12345;
pub const BLOCK_ID: u32 = 64293;

pub const MAINNET_NAME: &str = "mainnet";
pub const FUJI_NAME: &str = "fuji";
pub const UNIT_TEST_NAME: &str = "testing";
pub const LOCAL_NAME: &str = "local";
pub const BLOCK_NAME: &str = "block";

pub const MAINNET_HRP: &str = "avax";
pub const FUJI_HRP: &str = "fuji";
pub const UNIT_TEST_HRP: &str = "testing";
pub const LOCAL_HRP: &str = "local";
pub const BLOCK_HRP: &str = "block";

/// HRP used for any network ID outside the well-known set
pub const FALLBACK_HRP: &str = "custom";

/// Prefix of synthesized names for networks without a well-known name
pub const NETWORK_NAME_PREFIX: &str = "network-";

/// Networks that carry real value
pub const PRODUCTION_NETWORK_IDS: [u32; 2] = [MAINNET_ID, FUJI_ID];

/// A well-known network: its ID, name and address HRP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NetworkDescriptor {
    pub id: u32,
    pub name: &'static str,
    pub hrp: &'static str,
}

/// Authoritative list of well-known networks. Every lookup table is derived from it.
pub const WELL_KNOWN_NETWORKS: [NetworkDescriptor; 5] = [
    NetworkDescriptor {
        id: MAINNET_ID,
        name: MAINNET_NAME,
        hrp: MAINNET_HRP,
    },
    NetworkDescriptor {
        id: FUJI_ID,
        name: FUJI_NAME,
        hrp: FUJI_HRP,
    },
    NetworkDescriptor {
        id: UNIT_TEST_ID,
        name: UNIT_TEST_NAME,
        hrp: UNIT_TEST_HRP,
    },
    NetworkDescriptor {
        id: LOCAL_ID,
        name: LOCAL_NAME,
        hrp: LOCAL_HRP,
    },
    NetworkDescriptor {
        id: BLOCK_ID,
        name: BLOCK_NAME,
        hrp: BLOCK_HRP,
    },
];

/// Lookup tables over a fixed set of network descriptors
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    descriptors: Vec<NetworkDescriptor>,
    by_id: HashMap<u32, usize>,
    by_name: HashMap<&'static str, usize>,
    by_hrp: HashMap<&'static str, usize>,
}

impl NetworkRegistry {
    /// Build the registry, rejecting any repeated ID, name or HRP.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateNetwork` naming the first repeated attribute.
    pub fn new(descriptors: &[NetworkDescriptor]) -> Result<Self, DomainError> {
        let mut by_id = HashMap::with_capacity(descriptors.len());
        let mut by_name = HashMap::with_capacity(descriptors.len());
        let mut by_hrp = HashMap::with_capacity(descriptors.len());

        for (index, descriptor) in descriptors.iter().enumerate() {
            if by_id.insert(descriptor.id, index).is_some() {
                return Err(DomainError::DuplicateNetwork {
                    field: "id",
                    value: descriptor.id.to_string(),
                });
            }
            if by_name.insert(descriptor.name, index).is_some() {
                return Err(DomainError::DuplicateNetwork {
                    field: "name",
                    value: descriptor.name.to_string(),
                });
            }
            if by_hrp.insert(descriptor.hrp, index).is_some() {
                return Err(DomainError::DuplicateNetwork {
                    field: "hrp",
                    value: descriptor.hrp.to_string(),
                });
            }
        }

        Ok(Self {
            descriptors: descriptors.to_vec(),
            by_id,
            by_name,
            by_hrp,
        })
    }

    /// Well-known descriptor for `network_id`, if any
    #[must_use]
    pub fn descriptor(&self, network_id: u32) -> Option<&NetworkDescriptor> {
        self.by_id.get(&network_id).map(|&i| &self.descriptors[i])
    }

    /// All descriptors in table order
    pub fn descriptors(&self) -> impl Iterator<Item = &NetworkDescriptor> {
        self.descriptors.iter()
    }

    /// Bech32 HRP for `network_id`, or [`FALLBACK_HRP`] for unknown networks
    #[must_use]
    pub fn hrp(&self, network_id: u32) -> &'static str {
        self.descriptor(network_id).map_or(FALLBACK_HRP, |d| d.hrp)
    }

    /// Human readable name for `network_id`; unknown networks become `network-<id>`
    #[must_use]
    pub fn network_name(&self, network_id: u32) -> Cow<'static, str> {
        match self.descriptor(network_id) {
            Some(d) => Cow::Borrowed(d.name),
            None => Cow::Owned(format!("{NETWORK_NAME_PREFIX}{network_id}")),
        }
    }

    /// Resolve a network name, a `network-<id>` name or a bare decimal ID.
    ///
    /// Matching is case-insensitive: the input is lowercased before both the
    /// well-known name lookup and the prefix check. Whitespace is not trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ParseNetworkNameError` holding the original input when the
    /// text is neither a well-known name nor an unsigned 32-bit decimal.
    pub fn network_id(&self, network_name: &str) -> Result<u32, ParseNetworkNameError> {
        let lowered = network_name.to_lowercase();
        if let Some(&i) = self.by_name.get(lowered.as_str()) {
            return Ok(self.descriptors[i].id);
        }

        let id_str = lowered
            .strip_prefix(NETWORK_NAME_PREFIX)
            .unwrap_or(lowered.as_str());
        parse_decimal_u32(id_str).ok_or_else(|| ParseNetworkNameError::new(network_name))
    }

    /// Network ID for a well-known HRP (exact match)
    #[must_use]
    pub fn network_id_for_hrp(&self, hrp: &str) -> Option<u32> {
        self.by_hrp.get(hrp).map(|&i| self.descriptors[i].id)
    }
}

/// Strict unsigned decimal: digits only, no sign, must fit in 32 bits.
fn parse_decimal_u32(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

lazy_static! {
    /// Process-wide registry of the well-known networks
    pub static ref NETWORK_REGISTRY: NetworkRegistry =
        NetworkRegistry::new(&WELL_KNOWN_NETWORKS).expect("well-known networks are unique");
}

/// See [`NetworkRegistry::hrp`]
#[must_use]
pub fn hrp(network_id: u32) -> &'static str {
    NETWORK_REGISTRY.hrp(network_id)
}

/// See [`NetworkRegistry::network_name`]
#[must_use]
pub fn network_name(network_id: u32) -> Cow<'static, str> {
    NETWORK_REGISTRY.network_name(network_id)
}

/// See [`NetworkRegistry::network_id`]
///
/// # Errors
///
/// Returns `ParseNetworkNameError` if `network_name` cannot be resolved.
pub fn network_id(network_name: &str) -> Result<u32, ParseNetworkNameError> {
    NETWORK_REGISTRY.network_id(network_name)
}

/// See [`NetworkRegistry::network_id_for_hrp`]
#[must_use]
pub fn network_id_for_hrp(hrp: &str) -> Option<u32> {
    NETWORK_REGISTRY.network_id_for_hrp(hrp)
}

#[must_use]
pub fn is_production(network_id: u32) -> bool {
    PRODUCTION_NETWORK_IDS.contains(&network_id)
}

/// Display view of any network ID, well-known or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    id: u32,
    name: String,
    hrp: String,
    well_known: bool,
    production: bool,
}

impl NetworkInfo {
    /// Describe `network_id` using `registry`
    #[must_use]
    pub fn from_registry(registry: &NetworkRegistry, network_id: u32) -> Self {
        Self {
            id: network_id,
            name: registry.network_name(network_id).into_owned(),
            hrp: registry.hrp(network_id).to_string(),
            well_known: registry.descriptor(network_id).is_some(),
            production: is_production(network_id),
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    #[must_use]
    pub fn well_known(&self) -> bool {
        self.well_known
    }

    #[must_use]
    pub fn production(&self) -> bool {
        self.production
    }
}

impl From<u32> for NetworkInfo {
    fn from(network_id: u32) -> Self {
        Self::from_registry(&NETWORK_REGISTRY, network_id)
    }
}
