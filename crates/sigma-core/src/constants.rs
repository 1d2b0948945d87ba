//! Protocol constants. All monetary values in satoshi-style units (1 coin = 10^8 units).

pub const COIN: u64 = 100_000_000;

/// Rounding step for the fine path: the value of the smallest denomination.
pub const FINE_GRANULARITY: u64 = COIN / 10;

/// Rounding step for the coarse path: the value of the smallest coarse denomination.
pub const COARSE_GRANULARITY: u64 = COIN;

/// Number of denominations in the closed table.
pub const DENOMINATION_COUNT: usize = 5;
