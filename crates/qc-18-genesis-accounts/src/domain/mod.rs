//! # Domain Module
//!
//! Core domain types for Genesis Accounts: account records, the vesting
//! builder, balance entries, the genesis document model and the merger.

pub mod accounts;
pub mod balances;
pub mod errors;
pub mod genesis;
pub mod invariants;
pub mod merger;
pub mod vesting;

pub use accounts::*;
pub use balances::*;
pub use errors::*;
pub use genesis::*;
pub use invariants::*;
pub use merger::*;
pub use vesting::*;
