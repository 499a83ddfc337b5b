//! # Outbound Ports
//!
//! Traits for external dependencies (key storage, genesis persistence).

use std::io;

use shared_types::Address;
use thiserror::Error;

/// Key storage errors.
#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// No key is stored under this alias.
    #[error("key {0:?} not found")]
    NotFound(String),

    /// The key store cannot be reached.
    #[error("keyring unavailable: {0}")]
    Unavailable(String),

    /// The alias cannot name a key (empty, path separators, ...).
    #[error("invalid key name {0:?}")]
    InvalidAlias(String),

    /// A stored key record could not be decoded.
    #[error("key {alias:?} is corrupted: {reason}")]
    Corrupted {
        /// Key alias
        alias: String,
        /// Decode failure
        reason: String,
    },
}

/// Key storage - outbound port.
///
/// Looked up only when the user's input is not already an address.
pub trait KeyStore: Send + Sync {
    /// Address of the key stored under `alias`.
    fn key_address(&self, alias: &str) -> Result<Address, KeyStoreError>;
}

/// Genesis persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing stored at the location.
    #[error("{0} does not exist")]
    NotFound(String),

    /// I/O failure.
    #[error("{location}: {source}")]
    Io {
        /// Location being accessed
        location: String,
        /// Cause
        #[source]
        source: io::Error,
    },
}

/// Genesis document storage - outbound port.
///
/// `persist` must be atomic: readers observe either the old bytes or the new
/// bytes, never a mix.
pub trait GenesisStore: Send + Sync {
    /// Read the whole document.
    fn load(&self) -> Result<Vec<u8>, StoreError>;

    /// Replace the whole document.
    fn persist(&self, bytes: &[u8]) -> Result<(), StoreError>;

    /// Human-readable location for logs and errors.
    fn location(&self) -> String;
}
