//! Error types shared across sigma crates.
use thiserror::Error;

use crate::denomination::Denomination;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenominationError {
    #[error("no denomination with value {0}")] UnknownValue(u64),
    #[error("unknown denomination label: {0:?}")] UnknownLabel(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("insufficient {denomination} coins: requested {requested}, available {available}")]
    InsufficientInventory { denomination: Denomination, requested: u64, available: u64 },
    #[error("stale snapshot: planned at generation {expected}, inventory is at {actual}")]
    StaleSnapshot { expected: u64, actual: u64 },
    #[error("coin already in inventory: {0}")] DuplicateCoin(String),
    #[error("coin already spent: {0}")] AlreadySpent(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssuanceError {
    #[error("issuer rejected {denomination}: {reason}")] Rejected { denomination: Denomination, reason: String },
    #[error("issuer unavailable: {0}")] Unavailable(String),
}
