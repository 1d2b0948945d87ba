//! # sigma-core
//! Denomination table, coin records and the inventory/issuance contracts
//! shared by sigma wallet crates.

pub mod amount;
pub mod constants;
pub mod denomination;
pub mod error;
pub mod traits;
pub mod types;
