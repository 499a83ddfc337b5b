//! # Adapters
//!
//! Concrete implementations of the outbound ports.

pub mod genesis_file;
pub mod keyring;
pub mod memory;

pub use genesis_file::GenesisFile;
pub use keyring::{DirectoryKeyring, KeyInfo, KeyringBackend, UnknownBackend};
pub use memory::{MemoryGenesisStore, MemoryKeyStore};
