//! # Shared Types Crate
//!
//! Value types used by every genesis subsystem and tool.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Address` and `Coins` are defined once here
//!   so the account registry and the balance ledger agree on ordering and
//!   equality.
//! - **Normalized by Construction**: a `Coins` value is always sorted by
//!   denomination, free of duplicates and free of zero amounts.
//! - **No Ambient Configuration**: the bech32 prefix is passed explicitly to
//!   address parsing; there is no process-wide address config.

pub mod address;
pub mod coins;
pub mod errors;

pub use address::Address;
pub use coins::{Coin, Coins};
pub use errors::*;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;
