//! # Domain Errors
//!
//! Error types for Genesis Accounts.
//!
//! Every error is terminal for the invocation that produced it. Nothing is
//! retried and nothing is persisted once an error has been returned.

use std::fmt;

use shared_types::{Address, CoinError, Coins};
use thiserror::Error;

/// Structural validation failures of a single account record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Public key is present but not a JSON object.
    #[error("account {0} has a malformed public key")]
    InvalidPubKey(Address),

    /// Vesting account with nothing to vest.
    #[error("vesting account {0} has an empty original vesting amount")]
    EmptyOriginalVesting(Address),

    /// Vesting account whose end time is not positive.
    #[error("vesting account {address} has invalid end time {end_time}")]
    InvalidEndTime {
        /// Account address
        address: Address,
        /// Offending end time
        end_time: i64,
    },

    /// Continuous vesting account that ends before (or when) it starts.
    #[error("vesting start-time cannot be before end-time ({address}: start {start_time}, end {end_time})")]
    StartNotBeforeEnd {
        /// Account address
        address: Address,
        /// Vesting start
        start_time: i64,
        /// Vesting end
        end_time: i64,
    },

    /// More coins delegated out of the vesting schedule than it holds.
    #[error("delegated vesting amount cannot be greater than original vesting amount ({0})")]
    DelegatedExceedsOriginal(Address),

    /// Module account without a name.
    #[error("module account {0} has an empty name")]
    EmptyModuleName(Address),

    /// Two records in the registry share an address.
    #[error("duplicate account found in genesis state; address: {0}")]
    DuplicateAddress(Address),
}

/// Field a coin list was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinField {
    /// The funding balance.
    Amount,
    /// The `--vesting-amount` list.
    VestingAmount,
}

impl fmt::Display for CoinField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinField::Amount => f.write_str("coins"),
            CoinField::VestingAmount => f.write_str("vesting amount"),
        }
    }
}

/// Stage of the load/merge/persist pipeline that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenesisStage {
    /// Reading the file from disk.
    Read,
    /// Parsing the top-level document.
    ParseDocument,
    /// Decoding the account registry.
    DecodeAccounts,
    /// Decoding the balance ledger.
    DecodeBalances,
    /// Re-encoding the account registry.
    EncodeAccounts,
    /// Re-encoding the balance ledger.
    EncodeBalances,
    /// Adding the new balance to the supply.
    UpdateSupply,
    /// Serializing the full document.
    EncodeDocument,
    /// Atomic replacement of the file.
    Persist,
}

impl fmt::Display for GenesisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            GenesisStage::Read => "read genesis file",
            GenesisStage::ParseDocument => "parse genesis document",
            GenesisStage::DecodeAccounts => "decode account registry",
            GenesisStage::DecodeBalances => "decode balance ledger",
            GenesisStage::EncodeAccounts => "encode account registry",
            GenesisStage::EncodeBalances => "encode balance ledger",
            GenesisStage::UpdateSupply => "update total supply",
            GenesisStage::EncodeDocument => "encode genesis document",
            GenesisStage::Persist => "write genesis file",
        };
        f.write_str(stage)
    }
}

/// Coarse error category, stable across message changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AddressResolution,
    CoinParse,
    VestingParams,
    VestingAmountExceedsBalance,
    AccountValidation,
    DuplicateAccount,
    GenesisLoad,
    GenesisWrite,
}

/// Genesis account error types.
#[derive(Debug, Error)]
pub enum GenesisAccountError {
    /// Input is neither a valid address nor a resolvable key alias.
    #[error("failed to resolve {input:?} as an address or key name: {reason}")]
    AddressResolution {
        /// What the user typed
        input: String,
        /// Why both interpretations failed
        reason: String,
    },

    /// Malformed coin list.
    #[error("failed to parse {field}: {source}")]
    CoinParse {
        /// Which list failed
        field: CoinField,
        /// Parser error
        #[source]
        source: CoinError,
    },

    /// Start/end combination that selects no vesting schedule.
    #[error("invalid vesting parameters; must supply start and end time or end time")]
    VestingParams {
        /// Requested start (0 = unset)
        start: i64,
        /// Requested end (0 = unset)
        end: i64,
    },

    /// Vesting amount not covered by the funding balance.
    #[error("vesting amount cannot be greater than total amount")]
    VestingAmountExceedsBalance {
        /// Requested vesting amount
        vesting: Coins,
        /// Funding balance
        balance: Coins,
    },

    /// Account record fails its own structural checks.
    #[error("failed to validate new genesis account: {0}")]
    AccountValidation(#[from] AccountError),

    /// The registry already holds this address.
    #[error("cannot add account at existing address {0}")]
    DuplicateAccount(Address),

    /// Genesis document missing, unreadable or undecodable.
    #[error("failed to {stage}: {reason}")]
    GenesisLoad {
        /// Failing stage
        stage: GenesisStage,
        /// Underlying cause
        reason: String,
    },

    /// Encoding or persistence failure.
    #[error("failed to {stage}: {reason}")]
    GenesisWrite {
        /// Failing stage
        stage: GenesisStage,
        /// Underlying cause
        reason: String,
    },
}

impl GenesisAccountError {
    /// Error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenesisAccountError::AddressResolution { .. } => ErrorKind::AddressResolution,
            GenesisAccountError::CoinParse { .. } => ErrorKind::CoinParse,
            GenesisAccountError::VestingParams { .. } => ErrorKind::VestingParams,
            GenesisAccountError::VestingAmountExceedsBalance { .. } => {
                ErrorKind::VestingAmountExceedsBalance
            }
            GenesisAccountError::AccountValidation(_) => ErrorKind::AccountValidation,
            GenesisAccountError::DuplicateAccount(_) => ErrorKind::DuplicateAccount,
            GenesisAccountError::GenesisLoad { .. } => ErrorKind::GenesisLoad,
            GenesisAccountError::GenesisWrite { .. } => ErrorKind::GenesisWrite,
        }
    }

    pub(crate) fn load(stage: GenesisStage, reason: impl ToString) -> Self {
        GenesisAccountError::GenesisLoad {
            stage,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write(stage: GenesisStage, reason: impl ToString) -> Self {
        GenesisAccountError::GenesisWrite {
            stage,
            reason: reason.to_string(),
        }
    }
}
