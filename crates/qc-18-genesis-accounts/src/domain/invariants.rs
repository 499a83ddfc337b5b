//! # Domain Invariants
//!
//! Cross-subsystem rules that must hold for every persisted genesis.

use std::collections::HashSet;

use shared_types::{Address, Coins};

use super::accounts::GenesisAccount;
use super::balances::Balance;
use super::errors::AccountError;

/// Invariant: the vesting amount is covered by the funding balance.
///
/// Every vesting component must be at most the matching balance component.
pub fn invariant_vesting_covered(vesting: &Coins, balance: &Coins) -> bool {
    if balance.is_empty() && !vesting.is_empty() {
        return false;
    }
    vesting.is_all_lte(balance)
}

/// Invariant: no two registry records share an address.
pub fn invariant_unique_accounts(accounts: &[GenesisAccount]) -> Result<(), AccountError> {
    let mut seen: HashSet<&Address> = HashSet::with_capacity(accounts.len());
    for account in accounts {
        if !seen.insert(account.address()) {
            return Err(AccountError::DuplicateAddress(account.address().clone()));
        }
    }
    Ok(())
}

/// Invariant: every registry record passes its own validation.
pub fn invariant_accounts_valid(accounts: &[GenesisAccount]) -> Result<(), AccountError> {
    invariant_unique_accounts(accounts)?;
    accounts.iter().try_for_each(GenesisAccount::validate)
}

/// Invariant: ledger entries are strictly ascending by address.
///
/// Strict order implies at most one entry per address.
pub fn invariant_balances_sorted(balances: &[Balance]) -> bool {
    balances.windows(2).all(|w| w[0].address < w[1].address)
}
