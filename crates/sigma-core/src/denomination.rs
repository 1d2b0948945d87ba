//! The closed denomination table.
//!
//! Coins exist only in five face values. The covering algorithms walk the
//! table in descending order and rely on every value being an exact multiple
//! of the next smaller one within the set they walk, so the table is a plain
//! enum rather than anything extensible.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{COIN, DENOMINATION_COUNT};
use crate::error::DenominationError;

/// Face value of a coin.
///
/// Variants are declared in ascending value order, so the derived `Ord`
/// matches ordering by [`value`](Self::value).
///
/// # Examples
///
/// ```
/// use sigma_core::constants::COIN;
/// use sigma_core::denomination::Denomination;
/// assert_eq!(Denomination::D10.value(), 10 * COIN);
/// assert!(Denomination::D0_5 < Denomination::D1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Denomination {
    /// 0.1 coin.
    D0_1,
    /// 0.5 coin.
    D0_5,
    /// 1 coin.
    D1,
    /// 10 coins.
    D10,
    /// 100 coins.
    D100,
}

impl Denomination {
    /// Every denomination, largest first.
    pub const ALL: [Denomination; DENOMINATION_COUNT] = [
        Self::D100,
        Self::D10,
        Self::D1,
        Self::D0_5,
        Self::D0_1,
    ];

    /// Denominations worth at least one whole coin, largest first.
    pub const COARSE: [Denomination; 3] = [Self::D100, Self::D10, Self::D1];

    /// Value in smallest currency units.
    pub const fn value(self) -> u64 {
        match self {
            Self::D0_1 => COIN / 10,
            Self::D0_5 => COIN / 2,
            Self::D1 => COIN,
            Self::D10 => 10 * COIN,
            Self::D100 => 100 * COIN,
        }
    }

    /// Position in ascending value order, `0..DENOMINATION_COUNT`.
    pub const fn index(self) -> usize {
        match self {
            Self::D0_1 => 0,
            Self::D0_5 => 1,
            Self::D1 => 2,
            Self::D10 => 3,
            Self::D100 => 4,
        }
    }

    /// Whether this denomination is worth at least one whole coin.
    pub const fn is_coarse(self) -> bool {
        self.value() >= COIN
    }

    /// Look up the denomination with exactly this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigma_core::constants::COIN;
    /// use sigma_core::denomination::Denomination;
    /// assert_eq!(Denomination::from_value(COIN / 2), Ok(Denomination::D0_5));
    /// assert!(Denomination::from_value(3 * COIN).is_err());
    /// ```
    pub fn from_value(value: u64) -> Result<Self, DenominationError> {
        Self::ALL
            .into_iter()
            .find(|d| d.value() == value)
            .ok_or(DenominationError::UnknownValue(value))
    }

    /// Canonical short label, e.g. `"0.5"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D0_1 => "0.1",
            Self::D0_5 => "0.5",
            Self::D1 => "1",
            Self::D10 => "10",
            Self::D100 => "100",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Denomination {
    type Err = DenominationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s.trim())
            .ok_or_else(|| DenominationError::UnknownLabel(s.to_string()))
    }
}

impl Serialize for Denomination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Denomination {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
