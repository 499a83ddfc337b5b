//! # Inbound Ports
//!
//! API trait defining what the Genesis Accounts subsystem can do.

use shared_types::{Address, Coins};

use crate::domain::{GenesisAccountError, VestingKind};

/// Request to add one account to the genesis.
///
/// Coin lists are given in their text form, e.g. `1000stake,10atom`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddGenesisAccountRequest {
    /// Literal address or key alias.
    pub address_or_key_name: String,
    /// Funding balance.
    pub coins: String,
    /// Amount subject to vesting. Empty for a plain account.
    pub vesting_amount: String,
    /// Unix seconds, 0 = unset.
    pub vesting_start_time: i64,
    /// Unix seconds, 0 = unset.
    pub vesting_end_time: i64,
}

impl AddGenesisAccountRequest {
    pub fn new(address_or_key_name: impl Into<String>, coins: impl Into<String>) -> Self {
        Self {
            address_or_key_name: address_or_key_name.into(),
            coins: coins.into(),
            ..Self::default()
        }
    }

    pub fn with_vesting(mut self, amount: impl Into<String>, start: i64, end: i64) -> Self {
        self.vesting_amount = amount.into();
        self.vesting_start_time = start;
        self.vesting_end_time = end;
        self
    }
}

/// What was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddGenesisAccountReport {
    /// Canonical address of the new account.
    pub address: Address,
    /// Vesting variant chosen.
    pub kind: VestingKind,
    /// Funding balance as stored.
    pub balance: Coins,
    /// Total supply after the merge.
    pub supply: Coins,
    /// Registry size after the merge.
    pub total_accounts: usize,
}

/// Genesis Accounts API - inbound port.
pub trait GenesisAccountApi {
    /// Resolve, build, merge and persist one new genesis account.
    ///
    /// On error the stored genesis is left byte-for-byte unchanged.
    fn add_genesis_account(
        &self,
        request: &AddGenesisAccountRequest,
    ) -> Result<AddGenesisAccountReport, GenesisAccountError>;
}
