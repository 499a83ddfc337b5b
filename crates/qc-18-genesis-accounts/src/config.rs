//! # Genesis Accounts Configuration
//!
//! Everything the subsystem needs to know about the chain it builds a genesis
//! for. Nothing here is global: each service instance owns its config.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default bech32 human-readable prefix for account addresses.
pub const DEFAULT_ADDRESS_PREFIX: &str = "qc";

/// Default location of the genesis document relative to the home directory.
pub const DEFAULT_GENESIS_FILE: &str = "config/genesis.json";

/// Genesis accounts configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccountsConfig {
    /// Bech32 prefix that literal addresses must carry.
    pub address_prefix: String,

    /// `app_state` key of the account registry.
    pub auth_module: String,

    /// `app_state` key of the balance ledger.
    pub bank_module: String,

    /// Genesis document path, relative to the home directory.
    pub genesis_file: PathBuf,
}

impl Default for GenesisAccountsConfig {
    fn default() -> Self {
        Self {
            address_prefix: DEFAULT_ADDRESS_PREFIX.to_string(),
            auth_module: "auth".to_string(),
            bank_module: "bank".to_string(),
            genesis_file: PathBuf::from(DEFAULT_GENESIS_FILE),
        }
    }
}

impl GenesisAccountsConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_ADDRESS_PREFIX`: Bech32 prefix (default: qc)
    /// - `QC_GENESIS_FILE`: Genesis path relative to home (default: config/genesis.json)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            address_prefix: env::var("QC_ADDRESS_PREFIX")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.address_prefix),
            genesis_file: env::var("QC_GENESIS_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.genesis_file),
            ..defaults
        }
    }

    /// Create a config for testing.
    pub fn for_testing() -> Self {
        Self::default()
    }

    /// Absolute genesis path under `home`.
    pub fn genesis_path(&self, home: &Path) -> PathBuf {
        home.join(&self.genesis_file)
    }
}
