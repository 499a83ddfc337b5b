//! # QC-18 Genesis Accounts
//!
//! Offline construction of genesis accounts.
//!
//! **Subsystem ID:** 18  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Add one account, optionally vesting, to a serialized genesis document and
//! keep the account registry (`auth`) and the balance ledger (`bank`)
//! consistent with each other:
//! - no two accounts share an address
//! - the ledger supply grows by exactly the new balance
//! - a vesting amount never exceeds the balance that funds it
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-genesis-accounts/
//! ├── domain/          # Accounts, vesting builder, balances, genesis document, merger
//! ├── ports/           # API trait (inbound) + KeyStore / GenesisStore (outbound)
//! ├── application/     # AddressResolver, GenesisAccountService
//! ├── adapters/        # GenesisFile, DirectoryKeyring, in-memory fakes
//! └── config.rs        # GenesisAccountsConfig
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{
    DirectoryKeyring, GenesisFile, KeyInfo, KeyringBackend, MemoryGenesisStore, MemoryKeyStore,
};
pub use application::{AddressResolver, GenesisAccountService};
pub use config::GenesisAccountsConfig;
pub use domain::{
    AccountError, AuthGenesisState, Balance, BankGenesisState, BaseAccount, CoinField,
    ErrorKind, GenesisAccount, GenesisAccountError, GenesisDocument, GenesisStage,
    GenesisStateMerger, NewGenesisAccount, VestingAccountBuilder, VestingKind, VestingParams,
};
pub use ports::{
    AddGenesisAccountReport, AddGenesisAccountRequest, GenesisAccountApi, GenesisStore,
    KeyStore, KeyStoreError, StoreError,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
