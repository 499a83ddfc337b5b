//! # Account Records
//!
//! The closed set of account variants stored in the account registry.
//!
//! Records are tagged with `"@type"` on the wire. Integers are written as
//! decimal strings and accepted either as strings or as JSON numbers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use shared_types::{Address, Coins};

use super::errors::AccountError;

/// Type URL of [`BaseAccount`].
pub const BASE_ACCOUNT_TYPE: &str = "/cosmos.auth.v1beta1.BaseAccount";
/// Type URL of [`DelayedVestingAccount`].
pub const DELAYED_VESTING_ACCOUNT_TYPE: &str = "/cosmos.vesting.v1beta1.DelayedVestingAccount";
/// Type URL of [`ContinuousVestingAccount`].
pub const CONTINUOUS_VESTING_ACCOUNT_TYPE: &str =
    "/cosmos.vesting.v1beta1.ContinuousVestingAccount";
/// Type URL of [`ModuleAccount`].
pub const MODULE_ACCOUNT_TYPE: &str = "/cosmos.auth.v1beta1.ModuleAccount";

/// Plain account: address, optional key, counters.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAccount {
    pub address: Address,
    #[serde(default)]
    pub pub_key: Option<Value>,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub account_number: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub sequence: u64,
}

impl BaseAccount {
    /// A fresh genesis account: no key, number and sequence zero.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            pub_key: None,
            account_number: 0,
            sequence: 0,
        }
    }

    pub fn validate(&self) -> Result<(), AccountError> {
        match &self.pub_key {
            None | Some(Value::Object(_)) => Ok(()),
            Some(_) => Err(AccountError::InvalidPubKey(self.address.clone())),
        }
    }
}

/// Fields shared by every vesting variant.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseVestingAccount {
    pub base_account: BaseAccount,
    pub original_vesting: Coins,
    #[serde(default)]
    pub delegated_free: Coins,
    #[serde(default)]
    pub delegated_vesting: Coins,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    pub end_time: i64,
}

impl BaseVestingAccount {
    pub fn new(base_account: BaseAccount, original_vesting: Coins, end_time: i64) -> Self {
        Self {
            base_account,
            original_vesting,
            delegated_free: Coins::empty(),
            delegated_vesting: Coins::empty(),
            end_time,
        }
    }

    pub fn validate(&self) -> Result<(), AccountError> {
        self.base_account.validate()?;
        let address = &self.base_account.address;

        if self.original_vesting.is_empty() {
            return Err(AccountError::EmptyOriginalVesting(address.clone()));
        }
        if self.end_time <= 0 {
            return Err(AccountError::InvalidEndTime {
                address: address.clone(),
                end_time: self.end_time,
            });
        }
        if !self.delegated_vesting.is_all_lte(&self.original_vesting) {
            return Err(AccountError::DelegatedExceedsOriginal(address.clone()));
        }
        Ok(())
    }
}

/// Vests linearly between `start_time` and `end_time`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuousVestingAccount {
    pub base_vesting_account: BaseVestingAccount,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    pub start_time: i64,
}

impl ContinuousVestingAccount {
    pub fn validate(&self) -> Result<(), AccountError> {
        let base = &self.base_vesting_account;
        if self.start_time >= base.end_time {
            return Err(AccountError::StartNotBeforeEnd {
                address: base.base_account.address.clone(),
                start_time: self.start_time,
                end_time: base.end_time,
            });
        }
        base.validate()
    }
}

/// Vests everything at `end_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedVestingAccount {
    pub base_vesting_account: BaseVestingAccount,
}

/// Account owned by a module. Decoded and re-encoded, never created here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleAccount {
    pub base_account: BaseAccount,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl ModuleAccount {
    pub fn validate(&self) -> Result<(), AccountError> {
        if self.name.trim().is_empty() {
            return Err(AccountError::EmptyModuleName(self.base_account.address.clone()));
        }
        self.base_account.validate()
    }
}

/// Vesting schedule of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VestingKind {
    /// Funds are spendable immediately.
    None,
    /// Everything unlocks at the end time.
    Delayed,
    /// Linear unlock between start and end.
    Continuous,
}

impl std::fmt::Display for VestingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VestingKind::None => f.write_str("none"),
            VestingKind::Delayed => f.write_str("delayed"),
            VestingKind::Continuous => f.write_str("continuous"),
        }
    }
}

/// A polymorphic account record in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum GenesisAccount {
    #[serde(rename = "/cosmos.auth.v1beta1.BaseAccount")]
    Base(BaseAccount),
    #[serde(rename = "/cosmos.vesting.v1beta1.DelayedVestingAccount")]
    DelayedVesting(DelayedVestingAccount),
    #[serde(rename = "/cosmos.vesting.v1beta1.ContinuousVestingAccount")]
    ContinuousVesting(ContinuousVestingAccount),
    #[serde(rename = "/cosmos.auth.v1beta1.ModuleAccount")]
    Module(ModuleAccount),
}

impl GenesisAccount {
    pub fn base_account(&self) -> &BaseAccount {
        match self {
            GenesisAccount::Base(account) => account,
            GenesisAccount::DelayedVesting(account) => &account.base_vesting_account.base_account,
            GenesisAccount::ContinuousVesting(account) => {
                &account.base_vesting_account.base_account
            }
            GenesisAccount::Module(account) => &account.base_account,
        }
    }

    pub fn address(&self) -> &Address {
        &self.base_account().address
    }

    pub fn vesting_kind(&self) -> VestingKind {
        match self {
            GenesisAccount::Base(_) | GenesisAccount::Module(_) => VestingKind::None,
            GenesisAccount::DelayedVesting(_) => VestingKind::Delayed,
            GenesisAccount::ContinuousVesting(_) => VestingKind::Continuous,
        }
    }

    /// `"@type"` tag of this record.
    pub fn type_url(&self) -> &'static str {
        match self {
            GenesisAccount::Base(_) => BASE_ACCOUNT_TYPE,
            GenesisAccount::DelayedVesting(_) => DELAYED_VESTING_ACCOUNT_TYPE,
            GenesisAccount::ContinuousVesting(_) => CONTINUOUS_VESTING_ACCOUNT_TYPE,
            GenesisAccount::Module(_) => MODULE_ACCOUNT_TYPE,
        }
    }

    /// Structural self-validation.
    pub fn validate(&self) -> Result<(), AccountError> {
        match self {
            GenesisAccount::Base(account) => account.validate(),
            GenesisAccount::DelayedVesting(account) => account.base_vesting_account.validate(),
            GenesisAccount::ContinuousVesting(account) => account.validate(),
            GenesisAccount::Module(account) => account.validate(),
        }
    }
}
