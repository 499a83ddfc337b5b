//! # Vesting Account Builder
//!
//! Turns a base account, its funding balance and the requested vesting
//! schedule into the finished registry record.
//!
//! ## Decision Table
//!
//! | Vesting amount | Start | End | Result |
//! |----------------|-------|-----|--------|
//! | empty | any | any | base account |
//! | not covered by balance | any | any | `VestingAmountExceedsBalance` |
//! | set | ≠ 0 | ≠ 0 | continuous |
//! | set | 0 | ≠ 0 | delayed |
//! | set | any | 0 | `VestingParams` |

use shared_types::Coins;

use super::accounts::{
    BaseAccount, BaseVestingAccount, ContinuousVestingAccount, DelayedVestingAccount,
    GenesisAccount, VestingKind,
};
use super::balances::Balance;
use super::errors::GenesisAccountError;
use super::invariants::invariant_vesting_covered;

/// Requested vesting schedule. Times are unix seconds, 0 meaning unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VestingParams {
    pub amount: Coins,
    pub start_time: i64,
    pub end_time: i64,
}

impl VestingParams {
    pub fn new(amount: Coins, start_time: i64, end_time: i64) -> Self {
        Self {
            amount,
            start_time,
            end_time,
        }
    }
}

/// Account record plus the balance entry that funds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGenesisAccount {
    pub account: GenesisAccount,
    pub balance: Balance,
}

impl NewGenesisAccount {
    pub fn kind(&self) -> VestingKind {
        self.account.vesting_kind()
    }
}

/// Builds a [`NewGenesisAccount`].
#[derive(Debug, Clone)]
pub struct VestingAccountBuilder {
    base: BaseAccount,
    balance: Coins,
    vesting: VestingParams,
}

impl VestingAccountBuilder {
    pub fn new(base: BaseAccount, balance: Coins) -> Self {
        Self {
            base,
            balance,
            vesting: VestingParams::default(),
        }
    }

    pub fn vesting(mut self, vesting: VestingParams) -> Self {
        self.vesting = vesting;
        self
    }

    /// Select the variant, check the amount bound and self-validate.
    pub fn build(self) -> Result<NewGenesisAccount, GenesisAccountError> {
        let Self {
            base,
            balance,
            vesting,
        } = self;
        let funding = Balance::new(base.address.clone(), balance.clone());

        if vesting.amount.is_empty() {
            let account = GenesisAccount::Base(base);
            account.validate()?;
            return Ok(NewGenesisAccount {
                account,
                balance: funding,
            });
        }

        if !invariant_vesting_covered(&vesting.amount, &balance) {
            return Err(GenesisAccountError::VestingAmountExceedsBalance {
                vesting: vesting.amount,
                balance,
            });
        }

        let base_vesting = BaseVestingAccount::new(base, vesting.amount, vesting.end_time);
        let account = match (vesting.start_time, vesting.end_time) {
            (start, end) if start != 0 && end != 0 => {
                GenesisAccount::ContinuousVesting(ContinuousVestingAccount {
                    base_vesting_account: base_vesting,
                    start_time: start,
                })
            }
            (_, end) if end != 0 => GenesisAccount::DelayedVesting(DelayedVestingAccount {
                base_vesting_account: base_vesting,
            }),
            (start, end) => return Err(GenesisAccountError::VestingParams { start, end }),
        };

        account.validate()?;
        Ok(NewGenesisAccount {
            account,
            balance: funding,
        })
    }
}
