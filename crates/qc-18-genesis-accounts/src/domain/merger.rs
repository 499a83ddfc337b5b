//! # Genesis State Merger
//!
//! Applies one new account and its balance to a loaded [`GenesisDocument`].
//!
//! Both module states are decoded, updated and re-encoded before either is
//! written back into the document, so a failure at any stage leaves the
//! document exactly as it was.

use serde_json::{Map, Value};
use shared_types::{Address, Coins};

use super::accounts::{GenesisAccount, VestingKind};
use super::balances::{sanitize_balances, Balance};
use super::errors::{GenesisAccountError, GenesisStage};
use super::genesis::{AuthGenesisState, BankGenesisState, GenesisDocument};
use super::invariants::{invariant_accounts_valid, invariant_balances_sorted};
use super::vesting::NewGenesisAccount;

/// Outcome of a successful merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub address: Address,
    pub kind: VestingKind,
    pub balance: Coins,
    pub total_accounts: usize,
    pub supply: Coins,
}

/// Merges new accounts into the registry and ledger module states.
#[derive(Debug, Clone)]
pub struct GenesisStateMerger {
    auth_module: String,
    bank_module: String,
}

impl GenesisStateMerger {
    pub fn new(auth_module: impl Into<String>, bank_module: impl Into<String>) -> Self {
        Self {
            auth_module: auth_module.into(),
            bank_module: bank_module.into(),
        }
    }

    /// Merge `new` into `doc`. On error `doc` is unchanged.
    pub fn merge(
        &self,
        doc: &mut GenesisDocument,
        new: NewGenesisAccount,
    ) -> Result<MergeSummary, GenesisAccountError> {
        let address = new.account.address().clone();
        let kind = new.kind();

        let mut auth = AuthGenesisState::from_json(self.module_json(
            doc,
            &self.auth_module,
            GenesisStage::DecodeAccounts,
        )?)
        .map_err(|e| GenesisAccountError::load(GenesisStage::DecodeAccounts, e))?;

        for existing in &auth.accounts {
            existing.validate().map_err(|e| {
                GenesisAccountError::load(
                    GenesisStage::DecodeAccounts,
                    format!("existing account record is invalid: {}", e),
                )
            })?;
        }

        if auth.accounts.iter().any(|a| a.address() == &address) {
            return Err(GenesisAccountError::DuplicateAccount(address));
        }

        auth.accounts.push(new.account);
        auth.accounts = sanitize_accounts(auth.accounts);
        invariant_accounts_valid(&auth.accounts)?;

        let auth_json = auth
            .to_json()
            .map_err(|e| GenesisAccountError::write(GenesisStage::EncodeAccounts, e))?;

        let mut bank = BankGenesisState::from_json(self.module_json(
            doc,
            &self.bank_module,
            GenesisStage::DecodeBalances,
        )?)
        .map_err(|e| GenesisAccountError::load(GenesisStage::DecodeBalances, e))?;

        let added = new.balance.coins.clone();
        bank.balances.push(new.balance);
        bank.balances = sanitize_balances(std::mem::take(&mut bank.balances))
            .map_err(|e| GenesisAccountError::write(GenesisStage::UpdateSupply, e))?;
        bank.supply = bank
            .supply
            .checked_add(&added)
            .map_err(|e| GenesisAccountError::write(GenesisStage::UpdateSupply, e))?;
        debug_assert!(invariant_balances_sorted(&bank.balances));

        let bank_json = bank
            .to_json()
            .map_err(|e| GenesisAccountError::write(GenesisStage::EncodeBalances, e))?;

        let app_state = doc.app_state_mut();
        app_state.set_module(&self.auth_module, auth_json);
        app_state.set_module(&self.bank_module, bank_json);

        tracing::debug!(
            address = %address,
            accounts = auth.accounts.len(),
            supply = %bank.supply,
            "[qc-18] Merged genesis account"
        );

        Ok(MergeSummary {
            address,
            kind,
            balance: added,
            total_accounts: auth.accounts.len(),
            supply: bank.supply,
        })
    }

    /// Decoded module state. An absent module reads as an empty object and
    /// is appended to `app_state` when written back.
    fn module_json(
        &self,
        doc: &GenesisDocument,
        module: &str,
        stage: GenesisStage,
    ) -> Result<Value, GenesisAccountError> {
        match doc.app_state().module_json(module) {
            Some(decoded) => decoded.map_err(|e| GenesisAccountError::load(stage, e)),
            None => {
                tracing::debug!(module, "[qc-18] Module absent from app_state, starting empty");
                Ok(Value::Object(Map::new()))
            }
        }
    }
}

/// Drop repeated addresses (first occurrence wins) and stable-sort by address.
pub fn sanitize_accounts(accounts: Vec<GenesisAccount>) -> Vec<GenesisAccount> {
    let mut seen = std::collections::HashSet::with_capacity(accounts.len());
    let mut unique: Vec<GenesisAccount> = accounts
        .into_iter()
        .filter(|account| {
            let fresh = seen.insert(account.address().clone());
            if !fresh {
                tracing::warn!(
                    address = %account.address(),
                    "[qc-18] Dropping repeated account record"
                );
            }
            fresh
        })
        .collect();
    unique.sort_by(|a, b| a.address().cmp(b.address()));
    unique
}
