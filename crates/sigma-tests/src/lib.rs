//! Integration test suite for sigma coin selection.
//!
//! Drives the selector, inventory and wallet together through the fixed
//! end-to-end scenarios, randomized invariants, and concurrent spenders.

pub mod helpers;
