//! # Genesis Account Service
//!
//! Application service for one `add-genesis-account` invocation.
//!
//! ## Pipeline
//!
//! ```text
//! resolve address ─┐
//! parse coins ─────┼─> build account ─> load ─> merge ─> persist
//! parse vesting ───┘
//! ```
//!
//! Nothing is written unless every earlier step succeeded.

use shared_types::Coins;

use crate::application::AddressResolver;
use crate::config::GenesisAccountsConfig;
use crate::domain::{
    BaseAccount, CoinField, GenesisAccountError, GenesisDocument, GenesisStage,
    GenesisStateMerger, VestingAccountBuilder, VestingParams,
};
use crate::ports::{
    AddGenesisAccountReport, AddGenesisAccountRequest, GenesisAccountApi, GenesisStore, KeyStore,
};

/// Genesis Account Service - adds accounts to a stored genesis.
pub struct GenesisAccountService<K: KeyStore, S: GenesisStore> {
    /// Configuration.
    config: GenesisAccountsConfig,
    /// Key storage for alias lookups.
    keys: K,
    /// Genesis document storage.
    store: S,
    /// Module state merger.
    merger: GenesisStateMerger,
}

impl<K: KeyStore, S: GenesisStore> GenesisAccountService<K, S> {
    /// Create a new service.
    pub fn new(config: GenesisAccountsConfig, keys: K, store: S) -> Self {
        let merger = GenesisStateMerger::new(&config.auth_module, &config.bank_module);
        Self {
            config,
            keys,
            store,
            merger,
        }
    }

    pub fn config(&self) -> &GenesisAccountsConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load_document(&self) -> Result<GenesisDocument, GenesisAccountError> {
        let bytes = self
            .store
            .load()
            .map_err(|e| GenesisAccountError::load(GenesisStage::Read, e))?;

        GenesisDocument::from_slice(&bytes).map_err(|e| {
            GenesisAccountError::load(
                GenesisStage::ParseDocument,
                format!("{}: {}", self.store.location(), e),
            )
        })
    }
}

fn parse_coins(text: &str, field: CoinField) -> Result<Coins, GenesisAccountError> {
    Coins::parse(text).map_err(|source| GenesisAccountError::CoinParse { field, source })
}

impl<K: KeyStore, S: GenesisStore> GenesisAccountApi for GenesisAccountService<K, S> {
    fn add_genesis_account(
        &self,
        request: &AddGenesisAccountRequest,
    ) -> Result<AddGenesisAccountReport, GenesisAccountError> {
        let address = AddressResolver::new(&self.config.address_prefix, &self.keys)
            .resolve(&request.address_or_key_name)?;
        let balance = parse_coins(&request.coins, CoinField::Amount)?;
        let vesting_amount = parse_coins(&request.vesting_amount, CoinField::VestingAmount)?;

        let new = VestingAccountBuilder::new(BaseAccount::new(address), balance)
            .vesting(VestingParams::new(
                vesting_amount,
                request.vesting_start_time,
                request.vesting_end_time,
            ))
            .build()?;

        let mut doc = self.load_document()?;
        let summary = self.merger.merge(&mut doc, new)?;

        let bytes = doc
            .to_vec_pretty()
            .map_err(|e| GenesisAccountError::write(GenesisStage::EncodeDocument, e))?;
        self.store
            .persist(&bytes)
            .map_err(|e| GenesisAccountError::write(GenesisStage::Persist, e))?;

        tracing::info!(
            address = %summary.address,
            kind = %summary.kind,
            coins = %summary.balance,
            location = %self.store.location(),
            "[qc-18] Added genesis account"
        );

        Ok(AddGenesisAccountReport {
            address: summary.address,
            kind: summary.kind,
            balance: summary.balance,
            supply: summary.supply,
            total_accounts: summary.total_accounts,
        })
    }
}
