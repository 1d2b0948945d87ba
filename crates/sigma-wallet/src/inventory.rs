//! In-memory coin inventory.
//!
//! [`MemoryInventory`] keeps unused coins in one FIFO bucket per denomination
//! behind a single `RwLock`. Snapshots and counts take the read lock; claims,
//! commits and insertions take the write lock and bump a generation counter,
//! so a plan computed from a snapshot can be committed only if nothing moved
//! in between.

use std::collections::{HashSet, VecDeque};

use parking_lot::RwLock;
use tracing::{debug, info};

use sigma_core::constants::DENOMINATION_COUNT;
use sigma_core::denomination::Denomination;
use sigma_core::error::InventoryError;
use sigma_core::traits::CoinInventory;
use sigma_core::types::{CoinId, CoinRecord, DenominationCounts, InventorySnapshot};

#[derive(Default)]
struct Buckets {
    /// Unused coins per denomination, oldest first.
    unused: [VecDeque<CoinRecord>; DENOMINATION_COUNT],
    /// Ids of coins currently in `unused`.
    held: HashSet<CoinId>,
    /// Ids of coins handed out by a claim or commit.
    spent: HashSet<CoinId>,
    generation: u64,
}

impl Buckets {
    fn available(&self, denomination: Denomination) -> u64 {
        self.unused[denomination.index()].len() as u64
    }

    fn counts(&self) -> DenominationCounts {
        let mut counts = DenominationCounts::new();
        for d in Denomination::ALL {
            counts.set(d, self.available(d));
        }
        counts
    }

    fn check(&self, denomination: Denomination, requested: u64) -> Result<(), InventoryError> {
        let available = self.available(denomination);
        if requested > available {
            return Err(InventoryError::InsufficientInventory {
                denomination,
                requested,
                available,
            });
        }
        Ok(())
    }

    /// Move the `n` oldest coins of `denomination` to the spent set.
    /// Caller has already checked availability.
    fn take(&mut self, denomination: Denomination, n: u64, out: &mut Vec<CoinRecord>) {
        let bucket = &mut self.unused[denomination.index()];
        for mut record in bucket.drain(..n as usize) {
            let id = record.id();
            self.held.remove(&id);
            self.spent.insert(id);
            record.is_used = true;
            out.push(record);
        }
    }
}

/// Thread-safe in-process coin inventory.
#[derive(Default)]
pub struct MemoryInventory {
    inner: RwLock<Buckets>,
}

impl MemoryInventory {
    /// Create an empty inventory at generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every record, stopping at the first rejected one.
    ///
    /// Returns the number of records added.
    pub fn add_coins(
        &self,
        records: impl IntoIterator<Item = CoinRecord>,
    ) -> Result<usize, InventoryError> {
        let mut added = 0;
        for record in records {
            self.add_coin(record)?;
            added += 1;
        }
        Ok(added)
    }

    /// Total value of unused coins.
    pub fn balance(&self) -> u64 {
        self.inner.read().counts().total_value()
    }

    /// Current generation. Changes on every successful mutation.
    pub fn generation(&self) -> u64 {
        self.inner.read().generation
    }

    /// Whether the coin was handed out by a claim or commit.
    pub fn is_spent(&self, id: &CoinId) -> bool {
        self.inner.read().spent.contains(id)
    }

    /// Number of coins handed out so far.
    pub fn spent_count(&self) -> usize {
        self.inner.read().spent.len()
    }

    /// Clones of the unused coins of one denomination, oldest first.
    pub fn unused_coins(&self, denomination: Denomination) -> Vec<CoinRecord> {
        self.inner.read().unused[denomination.index()]
            .iter()
            .cloned()
            .collect()
    }
}

impl CoinInventory for MemoryInventory {
    fn count(&self, denomination: Denomination) -> u64 {
        self.inner.read().available(denomination)
    }

    fn snapshot(&self) -> InventorySnapshot {
        let inner = self.inner.read();
        InventorySnapshot::new(inner.counts(), inner.generation)
    }

    fn add_coin(&self, record: CoinRecord) -> Result<(), InventoryError> {
        let id = record.id();
        let mut inner = self.inner.write();

        if record.is_used || inner.spent.contains(&id) {
            return Err(InventoryError::AlreadySpent(id.to_string()));
        }
        if !inner.held.insert(id) {
            return Err(InventoryError::DuplicateCoin(id.to_string()));
        }

        let denomination = record.denomination;
        inner.unused[denomination.index()].push_back(record);
        inner.generation += 1;
        debug!(%id, %denomination, generation = inner.generation, "inventory: coin added");
        Ok(())
    }

    fn claim(&self, denomination: Denomination, n: u64) -> Result<Vec<CoinRecord>, InventoryError> {
        let mut inner = self.inner.write();
        inner.check(denomination, n)?;
        if n == 0 {
            return Ok(Vec::new());
        }

        let mut claimed = Vec::with_capacity(n as usize);
        inner.take(denomination, n, &mut claimed);
        inner.generation += 1;
        debug!(%denomination, n, generation = inner.generation, "inventory: coins claimed");
        Ok(claimed)
    }

    fn commit(
        &self,
        spend: &DenominationCounts,
        generation: u64,
    ) -> Result<Vec<CoinRecord>, InventoryError> {
        let mut inner = self.inner.write();
        if inner.generation != generation {
            return Err(InventoryError::StaleSnapshot {
                expected: generation,
                actual: inner.generation,
            });
        }
        for (d, n) in spend.iter() {
            inner.check(d, n)?;
        }

        let mut claimed = Vec::with_capacity(spend.total_coins() as usize);
        for (d, n) in spend.iter() {
            inner.take(d, n, &mut claimed);
        }
        inner.generation += 1;
        info!(
            coins = claimed.len(),
            value = spend.total_value(),
            generation = inner.generation,
            "inventory: plan committed"
        );
        Ok(claimed)
    }
}

impl std::fmt::Debug for MemoryInventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("MemoryInventory")
            .field("unused", &inner.held.len())
            .field("spent", &inner.spent.len())
            .field("generation", &inner.generation)
            .finish()
    }
}
