//! # sigma-wallet — denomination-aware coin selection.
//!
//! Chooses which fixed-denomination coins to spend for an arbitrary amount,
//! decides the change to re-mint, and commits the choice against a shared
//! coin inventory without ever handing one coin to two spenders.
//!
//! # Modules
//!
//! - [`error`] — `WalletError` enum
//! - [`coin_selection`] — Coarse/fine covering and change planning
//! - [`inventory`] — In-memory, generation-checked coin inventory
//! - [`config`] — `WalletConfig`
//! - [`wallet`] — Plan/commit cycle, mint queue, balance

pub mod coin_selection;
pub mod config;
pub mod error;
pub mod inventory;
pub mod wallet;

// Re-exports for convenient access
pub use coin_selection::{CoinSelector, SelectionPath, SelectionPlan};
pub use config::WalletConfig;
pub use error::WalletError;
pub use inventory::MemoryInventory;
pub use wallet::{SpendOutcome, Wallet, WalletBalance};
