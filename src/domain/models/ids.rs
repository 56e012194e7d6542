//! Well-Known Identifiers
//!
//! 32-byte identifiers and the sentinel values reserved outside the
//! network-ID namespace.

use std::fmt;

use serde::{Serialize, Serializer};

/// Length in bytes of an [`Id`]
pub const ID_LEN: usize = 32;

/// Opaque 32-byte identifier for subnets and chains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Id([u8; ID_LEN]);

impl Id {
    /// The all-zero identifier
    pub const EMPTY: Self = Self([0; ID_LEN]);

    #[must_use]
    pub const fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<[u8; ID_LEN]> for Id {
    fn from(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }
}

/// Subnet ID of the primary network
pub const PRIMARY_NETWORK_ID: Id = Id::EMPTY;

/// Chain ID of the platform chain
pub const PLATFORM_CHAIN_ID: Id = Id::EMPTY;
