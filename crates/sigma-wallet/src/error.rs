//! Wallet error types.

use sigma_core::error::{InventoryError, IssuanceError};
use sigma_core::types::CoinRecord;
use thiserror::Error;

/// Errors that can occur in wallet operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Neither the coarse nor the fine covering path could reach the amount.
    #[error("insufficient funds: have {available}, need {need}")]
    InsufficientFunds {
        /// Value of unused coins in the snapshot, in smallest units.
        available: u64,
        /// Requested amount rounded up to the fine granularity.
        need: u64,
    },

    /// Invalid monetary amount (zero, overflowing, or off-granularity).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Commit kept losing the race against concurrent inventory changes.
    #[error("inventory changed during {attempts} consecutive commit attempts")]
    RetriesExhausted {
        /// Number of plan/commit rounds attempted.
        attempts: u32,
    },

    /// Pending mint queue is at its configured limit.
    #[error("mint queue full: {pending} pending, limit {limit}")]
    MintQueueFull {
        /// Denominations already queued.
        pending: usize,
        /// Configured queue limit.
        limit: usize,
    },

    /// Inventory claim or commit failure.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Coin issuance failure from the minting collaborator.
    #[error(transparent)]
    Issuance(#[from] IssuanceError),

    /// A coin was issued but the inventory refused it. The record is handed
    /// back so it is not lost.
    #[error("issued coin not stored: {source}")]
    MintNotStored {
        /// The issued coin.
        record: Box<CoinRecord>,
        /// Why the inventory refused it.
        source: InventoryError,
    },

    /// Serialization error.
    #[error("serialization: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigma_core::denomination::Denomination;

    #[test]
    fn display_insufficient_funds() {
        let e = WalletError::InsufficientFunds {
            available: 100,
            need: 200,
        };
        assert_eq!(e.to_string(), "insufficient funds: have 100, need 200");
    }

    #[test]
    fn display_retries_exhausted() {
        let e = WalletError::RetriesExhausted { attempts: 4 };
        assert_eq!(
            e.to_string(),
            "inventory changed during 4 consecutive commit attempts"
        );
    }

    #[test]
    fn display_mint_queue_full() {
        let e = WalletError::MintQueueFull { pending: 3, limit: 3 };
        assert_eq!(e.to_string(), "mint queue full: 3 pending, limit 3");
    }

    #[test]
    fn clone_and_eq() {
        let e1 = WalletError::InvalidAmount("zero".into());
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }

    #[test]
    fn from_inventory_error() {
        let inv = InventoryError::StaleSnapshot { expected: 1, actual: 2 };
        let wallet: WalletError = inv.clone().into();
        assert_eq!(wallet, WalletError::Inventory(inv));
    }

    #[test]
    fn display_mint_not_stored() {
        use sigma_core::types::{PublicCoin, SpendSecret};
        let record = CoinRecord::new(
            Denomination::D1,
            PublicCoin(vec![1, 2, 3]),
            SpendSecret {
                serial_number: [1; 32],
                randomness: [2; 32],
            },
        );
        let e = WalletError::MintNotStored {
            record: Box::new(record),
            source: InventoryError::DuplicateCoin("ab".into()),
        };
        assert_eq!(e.to_string(), "issued coin not stored: coin already in inventory: ab");
    }

    #[test]
    fn from_issuance_error() {
        let iss = IssuanceError::Rejected {
            denomination: Denomination::D1,
            reason: "params".into(),
        };
        let wallet: WalletError = iss.clone().into();
        assert_eq!(wallet, WalletError::Issuance(iss));
        assert_eq!(wallet.to_string(), "issuer rejected 1: params");
    }
}
