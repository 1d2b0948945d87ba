//! Shared test helpers for integration tests.

use std::sync::Arc;

use rand::rngs::OsRng;
use rand::RngCore;

use sigma_core::constants::COIN;
use sigma_core::denomination::Denomination;
use sigma_core::error::IssuanceError;
use sigma_core::traits::{CoinInventory, CoinIssuer};
use sigma_core::types::{CoinRecord, DenominationCounts, PublicCoin, SpendSecret};
use sigma_wallet::inventory::MemoryInventory;

/// One tenth of a coin, the smallest denomination.
pub const TENTH: u64 = COIN / 10;

/// Issuer producing coins with random public bytes and secrets.
#[derive(Debug, Default)]
pub struct RandomIssuer;

impl CoinIssuer for RandomIssuer {
    fn issue(&self, denomination: Denomination) -> Result<CoinRecord, IssuanceError> {
        let mut public = vec![0u8; 34];
        OsRng.fill_bytes(&mut public);
        let mut serial_number = [0u8; 32];
        let mut randomness = [0u8; 32];
        OsRng.fill_bytes(&mut serial_number);
        OsRng.fill_bytes(&mut randomness);
        Ok(CoinRecord::new(
            denomination,
            PublicCoin(public),
            SpendSecret {
                serial_number,
                randomness,
            },
        ))
    }
}

/// Counts in table order `0.1, 0.5, 1, 10, 100`.
pub fn coin_set(d01: u64, d05: u64, d1: u64, d10: u64, d100: u64) -> DenominationCounts {
    DenominationCounts::from_pairs(&[
        (Denomination::D0_1, d01),
        (Denomination::D0_5, d05),
        (Denomination::D1, d1),
        (Denomination::D10, d10),
        (Denomination::D100, d100),
    ])
}

/// Mint `counts` worth of fresh coins into `inventory`.
pub fn generate_wallet_coins(inventory: &dyn CoinInventory, counts: &DenominationCounts) {
    let issuer = RandomIssuer;
    for d in counts.to_denominations() {
        let record = issuer.issue(d).expect("random issuer never fails");
        inventory.add_coin(record).expect("fresh random coin is unique");
    }
}

/// A new shared inventory holding `counts`.
pub fn inventory_with(counts: &DenominationCounts) -> Arc<MemoryInventory> {
    let inventory = Arc::new(MemoryInventory::new());
    generate_wallet_coins(inventory.as_ref(), counts);
    inventory
}

/// Denomination counts of a set of records.
pub fn denominations_of(records: &[CoinRecord]) -> DenominationCounts {
    records.iter().map(|r| r.denomination).collect()
}

/// Denomination counts of a mint list.
pub fn mint_counts(mint: &[Denomination]) -> DenominationCounts {
    mint.iter().copied().collect()
}
