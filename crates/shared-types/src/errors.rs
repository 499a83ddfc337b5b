//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Errors produced while parsing or constructing an [`Address`](crate::Address).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Input was empty or whitespace.
    #[error("empty address string is not allowed")]
    Empty,

    /// The string is not valid bech32.
    #[error("decoding bech32 failed: {0}")]
    InvalidBech32(String),

    /// The address used the bech32m checksum variant.
    #[error("unsupported checksum variant: expected bech32, got bech32m")]
    UnsupportedVariant,

    /// The human-readable part does not match the expected prefix.
    #[error("invalid address prefix: expected {expected}, got {actual}")]
    PrefixMismatch { expected: String, actual: String },

    /// The payload has an unsupported length.
    #[error("address length {len} out of range (1..={max})")]
    InvalidLength { len: usize, max: usize },
}

/// Errors produced while parsing or combining coin lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoinError {
    /// Token does not have the `<amount><denom>` shape.
    #[error("invalid coin expression: {0:?}")]
    InvalidExpression(String),

    /// Amount is negative, non-numeric or otherwise malformed.
    #[error("invalid coin amount {amount:?} in {token:?}")]
    InvalidAmount { token: String, amount: String },

    /// Denomination does not satisfy the denom grammar.
    #[error("invalid denom: {0:?}")]
    InvalidDenom(String),

    /// Amount does not fit in 256 bits.
    #[error("coin amount overflow for denom {0}")]
    Overflow(String),

    /// Two entries share a denomination in a list that must be canonical.
    #[error("duplicate denomination {0}")]
    DuplicateDenom(String),

    /// Entries are not sorted by denomination in a list that must be canonical.
    #[error("denomination {0} is not sorted")]
    UnsortedDenom(String),

    /// A zero amount appeared in a list that must be canonical.
    #[error("coin {0} amount is not positive")]
    ZeroAmount(String),
}
