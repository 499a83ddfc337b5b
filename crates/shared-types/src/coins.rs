//! # Coins
//!
//! Denominated amounts and normalized coin lists.
//!
//! ## Normalization Rules
//!
//! | Rule | Description |
//! |------|-------------|
//! | Sorted | Entries are ordered by denomination (byte order) |
//! | Unique | Duplicate denominations are merged by summation |
//! | Positive | Zero amounts are dropped |
//! | Bounded | Amounts fit in 256 bits |
//!
//! Text form is `<amount><denom>[,<amount><denom>...]`, e.g. `10atom,1000stake`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoinError;

/// Minimum denomination length.
pub const MIN_DENOM_LEN: usize = 3;

/// Maximum denomination length.
pub const MAX_DENOM_LEN: usize = 128;

/// A single denominated amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// Unit label, e.g. `stake`.
    pub denom: String,
    /// Amount in base units, encoded as a decimal string on the wire.
    #[serde(with = "decimal_amount")]
    pub amount: U256,
}

impl Coin {
    /// Create a coin after validating its denomination.
    pub fn new(denom: impl Into<String>, amount: impl Into<U256>) -> Result<Self, CoinError> {
        let denom = denom.into();
        validate_denom(&denom)?;
        Ok(Self {
            denom,
            amount: amount.into(),
        })
    }

    /// Parse a single `<amount><denom>` token.
    ///
    /// Decimal amounts are accepted and truncated toward zero.
    pub fn parse(token: &str) -> Result<Self, CoinError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CoinError::InvalidExpression(token.to_string()));
        }

        let split = token
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| CoinError::InvalidExpression(token.to_string()))?;
        let (amount_str, denom) = (token[..split].trim(), token[split..].trim());

        validate_denom(denom)?;
        let amount = parse_amount(token, amount_str, denom)?;

        Ok(Self {
            denom: denom.to_string(),
            amount,
        })
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Validate a denomination against `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
pub fn validate_denom(denom: &str) -> Result<(), CoinError> {
    let invalid = || CoinError::InvalidDenom(denom.to_string());

    if denom.len() < MIN_DENOM_LEN || denom.len() > MAX_DENOM_LEN {
        return Err(invalid());
    }

    let mut chars = denom.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return Err(invalid()),
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')) {
        Ok(())
    } else {
        Err(invalid())
    }
}

fn parse_amount(token: &str, amount_str: &str, denom: &str) -> Result<U256, CoinError> {
    let invalid = || CoinError::InvalidAmount {
        token: token.to_string(),
        amount: amount_str.to_string(),
    };

    let (integer, fraction) = match amount_str.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (amount_str, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match fraction {
        None if integer.is_empty() || !all_digits(integer) => return Err(invalid()),
        Some(fraction) if fraction.is_empty() || !all_digits(fraction) || !all_digits(integer) => {
            return Err(invalid())
        }
        _ => {}
    }

    if integer.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_dec_str(integer).map_err(|_| CoinError::Overflow(denom.to_string()))
}

/// A normalized list of coins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// The empty coin list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize arbitrary coins: validate denoms, merge duplicates, drop
    /// zeros and sort by denomination.
    pub fn new(coins: Vec<Coin>) -> Result<Self, CoinError> {
        let mut merged: BTreeMap<String, U256> = BTreeMap::new();
        for Coin { denom, amount } in coins {
            validate_denom(&denom)?;
            let overflow = CoinError::Overflow(denom.clone());
            let entry = merged.entry(denom).or_insert_with(U256::zero);
            *entry = entry.checked_add(amount).ok_or(overflow)?;
        }
        Ok(Self::from_merged(merged))
    }

    /// Parse a comma-separated coin list. The empty string yields no coins.
    pub fn parse(s: &str) -> Result<Self, CoinError> {
        if s.trim().is_empty() {
            return Ok(Self::empty());
        }

        let coins = s
            .split(',')
            .map(Coin::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(coins)
    }

    /// Check the canonical-form invariants without modifying the list.
    pub fn validate(&self) -> Result<(), CoinError> {
        for (i, coin) in self.0.iter().enumerate() {
            validate_denom(&coin.denom)?;
            if coin.amount.is_zero() {
                return Err(CoinError::ZeroAmount(coin.denom.clone()));
            }
            if let Some(prev) = i.checked_sub(1).map(|j| &self.0[j]) {
                if prev.denom == coin.denom {
                    return Err(CoinError::DuplicateDenom(coin.denom.clone()));
                }
                if prev.denom > coin.denom {
                    return Err(CoinError::UnsortedDenom(coin.denom.clone()));
                }
            }
        }
        Ok(())
    }

    /// Component-wise sum. New denominations are inserted in order.
    pub fn checked_add(&self, other: &Coins) -> Result<Coins, CoinError> {
        let mut merged: BTreeMap<String, U256> = self
            .0
            .iter()
            .map(|c| (c.denom.clone(), c.amount))
            .collect();

        for coin in &other.0 {
            let entry = merged.entry(coin.denom.clone()).or_insert_with(U256::zero);
            *entry = entry
                .checked_add(coin.amount)
                .ok_or_else(|| CoinError::Overflow(coin.denom.clone()))?;
        }
        Ok(Self::from_merged(merged))
    }

    /// Amount held for `denom`, zero when absent.
    pub fn amount_of(&self, denom: &str) -> U256 {
        self.0
            .binary_search_by(|c| c.denom.as_str().cmp(denom))
            .map(|i| self.0[i].amount)
            .unwrap_or_else(|_| U256::zero())
    }

    /// True if any component of `self` exceeds the matching component of `other`.
    pub fn is_any_gt(&self, other: &Coins) -> bool {
        self.0.iter().any(|c| c.amount > other.amount_of(&c.denom))
    }

    /// True if every component of `self` is at most the matching component of `other`.
    pub fn is_all_lte(&self, other: &Coins) -> bool {
        !self.is_any_gt(other)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Coin] {
        &self.0
    }

    fn from_merged(merged: BTreeMap<String, U256>) -> Self {
        Self(
            merged
                .into_iter()
                .filter(|(_, amount)| !amount.is_zero())
                .map(|(denom, amount)| Coin { denom, amount })
                .collect(),
        )
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coin) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", coin)?;
        }
        Ok(())
    }
}

impl FromStr for Coins {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Coins {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Coins {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // `null` is how proto JSON renders an empty repeated field in some exporters.
        let coins = Option::<Vec<Coin>>::deserialize(deserializer)?.unwrap_or_default();
        Coins::new(coins).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a Coins {
    type Item = &'a Coin;
    type IntoIter = std::slice::Iter<'a, Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Decimal-string serde for `U256` (primitive-types' own serde uses hex).
mod decimal_amount {
    use std::fmt;

    use primitive_types::U256;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(amount)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }

    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = U256;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative decimal integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<U256, E> {
            if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
                return Err(E::invalid_value(de::Unexpected::Str(v), &self));
            }
            U256::from_dec_str(v).map_err(|_| E::custom(format!("amount {} overflows 256 bits", v)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<U256, E> {
            Ok(U256::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<U256, E> {
            u64::try_from(v)
                .map(U256::from)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }
    }
}
