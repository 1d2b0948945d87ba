//! Coin records, per-denomination counts and inventory snapshots.
//!
//! All monetary values are in smallest units (1 coin = 10^8 units).

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::DENOMINATION_COUNT;
use crate::denomination::Denomination;

/// A 32-byte hash value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// Return the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Identity of a coin: BLAKE3 of its public commitment bytes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoinId(pub Hash256);

impl fmt::Display for CoinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque public commitment of a coin, produced by the issuance layer.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct PublicCoin(pub Vec<u8>);

impl PublicCoin {
    /// Stable identity derived from the commitment bytes.
    pub fn id(&self) -> CoinId {
        CoinId(Hash256(*blake3::hash(&self.0).as_bytes()))
    }
}

impl fmt::Debug for PublicCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicCoin({})", hex::encode(&self.0))
    }
}

/// Secret material needed to spend a coin.
///
/// Zeroized on drop and never printed.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SpendSecret {
    /// Serial number revealed when the coin is spent.
    pub serial_number: [u8; 32],
    /// Blinding randomness of the commitment.
    pub randomness: [u8; 32],
}

impl fmt::Debug for SpendSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpendSecret")
            .field("serial_number", &"[REDACTED]")
            .field("randomness", &"[REDACTED]")
            .finish()
    }
}

/// One spendable coin owned by the wallet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CoinRecord {
    pub denomination: Denomination,
    pub public_coin: PublicCoin,
    pub secret: SpendSecret,
    /// Set exactly once, when a committed selection consumes the coin.
    pub is_used: bool,
}

impl CoinRecord {
    /// A fresh, unused record.
    pub fn new(denomination: Denomination, public_coin: PublicCoin, secret: SpendSecret) -> Self {
        Self {
            denomination,
            public_coin,
            secret,
            is_used: false,
        }
    }

    pub fn id(&self) -> CoinId {
        self.public_coin.id()
    }

    pub fn value(&self) -> u64 {
        self.denomination.value()
    }
}

/// Number of coins held (or to be spent, or minted) per denomination.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DenominationCounts([u64; DENOMINATION_COUNT]);

impl DenominationCounts {
    /// All counts zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(denomination, count)` pairs; repeated denominations accumulate.
    pub fn from_pairs(pairs: &[(Denomination, u64)]) -> Self {
        let mut counts = Self::new();
        for &(d, n) in pairs {
            counts.add(d, n);
        }
        counts
    }

    pub fn get(&self, denomination: Denomination) -> u64 {
        self.0[denomination.index()]
    }

    pub fn set(&mut self, denomination: Denomination, count: u64) {
        self.0[denomination.index()] = count;
    }

    pub fn add(&mut self, denomination: Denomination, count: u64) {
        let slot = &mut self.0[denomination.index()];
        *slot = slot.saturating_add(count);
    }

    /// `(denomination, count)` for every denomination, largest first.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u64)> + '_ {
        Denomination::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Summed value of all counted coins.
    pub fn total_value(&self) -> u64 {
        self.iter()
            .fold(0u64, |acc, (d, n)| acc.saturating_add(d.value().saturating_mul(n)))
    }

    pub fn total_coins(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, n| acc.saturating_add(*n))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|n| *n == 0)
    }

    /// True if no count exceeds the corresponding count in `available`.
    pub fn is_within(&self, available: &DenominationCounts) -> bool {
        self.iter().all(|(d, n)| n <= available.get(d))
    }

    /// Flatten into a multiset of denominations, largest first.
    pub fn to_denominations(&self) -> Vec<Denomination> {
        let mut out = Vec::with_capacity(self.total_coins().min(1024) as usize);
        for (d, n) in self.iter() {
            for _ in 0..n {
                out.push(d);
            }
        }
        out
    }
}

impl FromIterator<Denomination> for DenominationCounts {
    fn from_iter<T: IntoIterator<Item = Denomination>>(iter: T) -> Self {
        let mut counts = Self::new();
        for d in iter {
            counts.add(d, 1);
        }
        counts
    }
}

/// Immutable point-in-time view of an inventory's unused coin counts.
///
/// `generation` identifies the inventory state the counts were read from;
/// a commit planned against an older generation is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InventorySnapshot {
    pub counts: DenominationCounts,
    pub generation: u64,
}

impl InventorySnapshot {
    pub fn new(counts: DenominationCounts, generation: u64) -> Self {
        Self { counts, generation }
    }

    pub fn count(&self, denomination: Denomination) -> u64 {
        self.counts.get(denomination)
    }

    pub fn total_value(&self) -> u64 {
        self.counts.total_value()
    }
}
