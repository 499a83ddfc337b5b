//! # Account Addresses
//!
//! Bech32 account addresses (`<prefix>1<data><checksum>`).
//!
//! Identity is the decoded payload: two addresses are equal, ordered and hashed
//! by their bytes alone, so balances sort the same way regardless of the
//! prefix used to render them.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use bech32::{FromBase32, ToBase32, Variant};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AddressError;

/// Maximum payload length of an address in bytes.
pub const MAX_ADDRESS_LEN: usize = 255;

/// A bech32 account address.
#[derive(Clone)]
pub struct Address {
    bytes: Vec<u8>,
    encoded: String,
}

impl Address {
    /// Build an address from raw payload bytes under the given prefix.
    pub fn from_bytes(prefix: &str, bytes: &[u8]) -> Result<Self, AddressError> {
        verify_len(bytes.len())?;
        let encoded = bech32::encode(prefix, bytes.to_base32(), Variant::Bech32)
            .map_err(|e| AddressError::InvalidBech32(e.to_string()))?;
        Ok(Self {
            bytes: bytes.to_vec(),
            encoded,
        })
    }

    /// Parse a bech32 address with any human-readable prefix.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AddressError::Empty);
        }

        let (hrp, data, variant) =
            bech32::decode(s).map_err(|e| AddressError::InvalidBech32(e.to_string()))?;
        if variant != Variant::Bech32 {
            return Err(AddressError::UnsupportedVariant);
        }

        let bytes =
            Vec::<u8>::from_base32(&data).map_err(|e| AddressError::InvalidBech32(e.to_string()))?;
        Self::from_bytes(&hrp, &bytes)
    }

    /// Parse a bech32 address and require the given prefix.
    pub fn parse_with_prefix(s: &str, prefix: &str) -> Result<Self, AddressError> {
        let address = Self::parse(s)?;
        if address.prefix() != prefix {
            return Err(AddressError::PrefixMismatch {
                expected: prefix.to_string(),
                actual: address.prefix().to_string(),
            });
        }
        Ok(address)
    }

    /// Human-readable prefix this address was rendered with.
    pub fn prefix(&self) -> &str {
        // The separator is the last '1'; bech32 data never contains it.
        self.encoded
            .rsplit_once('1')
            .map(|(hrp, _)| hrp)
            .unwrap_or_default()
    }

    /// Decoded payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Canonical (lowercase) bech32 string.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

fn verify_len(len: usize) -> Result<(), AddressError> {
    if len == 0 || len > MAX_ADDRESS_LEN {
        return Err(AddressError::InvalidLength {
            len,
            max: MAX_ADDRESS_LEN,
        });
    }
    Ok(())
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Address {}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes.cmp(&other.bytes)
    }
}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.encoded)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encoded)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(serde::de::Error::custom)
    }
}
