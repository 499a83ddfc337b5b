//! # Balance Ledger Entries
//!
//! One entry per address in the persisted ledger, sorted by address bytes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared_types::{Address, CoinError, Coins};

/// Coins held by one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub address: Address,
    #[serde(default)]
    pub coins: Coins,
}

impl Balance {
    pub fn new(address: Address, coins: Coins) -> Self {
        Self { address, coins }
    }
}

/// Merge entries that share an address (summing coins) and sort by address.
pub fn sanitize_balances(balances: Vec<Balance>) -> Result<Vec<Balance>, CoinError> {
    let mut merged: BTreeMap<Address, Coins> = BTreeMap::new();
    for balance in balances {
        let coins = match merged.remove(&balance.address) {
            Some(existing) => existing.checked_add(&balance.coins)?,
            None => balance.coins,
        };
        merged.insert(balance.address, coins);
    }

    Ok(merged
        .into_iter()
        .map(|(address, coins)| Balance { address, coins })
        .collect())
}

/// Component-wise sum of every balance.
pub fn total_balances(balances: &[Balance]) -> Result<Coins, CoinError> {
    balances
        .iter()
        .try_fold(Coins::empty(), |acc, b| acc.checked_add(&b.coins))
}
