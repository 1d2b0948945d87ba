//! Trait interfaces between the selection engine and its collaborators.
//!
//! - [`CoinInventory`] — read/claim access to the wallet's unused coins
//!   (sigma-wallet's `MemoryInventory` implements)
//! - [`CoinIssuer`] — turns a denomination into a freshly minted coin record
//!   (the zero-knowledge issuance layer implements)

use crate::denomination::Denomination;
use crate::error::{InventoryError, IssuanceError};
use crate::types::{CoinRecord, DenominationCounts, InventorySnapshot};

/// Pool of the wallet's unused coins, grouped by denomination.
///
/// Reads are side-effect free. [`claim`](Self::claim) and
/// [`commit`](Self::commit) are the only mutations and must be mutually
/// exclusive: no record may ever be handed to two callers.
pub trait CoinInventory: Send + Sync {
    /// Number of unused coins of `denomination`.
    fn count(&self, denomination: Denomination) -> u64;

    /// Counts for every denomination plus the generation they were read at.
    fn snapshot(&self) -> InventorySnapshot;

    /// Add a freshly minted, unused record. Coins that are already held or
    /// were spent before are rejected.
    fn add_coin(&self, record: CoinRecord) -> Result<(), InventoryError>;

    /// Atomically take exactly `n` unused records of `denomination`, marking
    /// them used. Fails without side effects if fewer than `n` are available.
    fn claim(&self, denomination: Denomination, n: u64) -> Result<Vec<CoinRecord>, InventoryError>;

    /// Atomically claim every bucket in `spend`, provided the inventory is
    /// still at `generation`. All-or-nothing.
    fn commit(
        &self,
        spend: &DenominationCounts,
        generation: u64,
    ) -> Result<Vec<CoinRecord>, InventoryError>;
}

/// Producer of new coins for a requested denomination.
pub trait CoinIssuer: Send + Sync {
    fn issue(&self, denomination: Denomination) -> Result<CoinRecord, IssuanceError>;
}
