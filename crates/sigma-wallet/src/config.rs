//! Wallet configuration.
//!
//! Provides [`WalletConfig`] with defaults for commit retries and the pending
//! mint queue. Can be built programmatically or parsed from JSON.

use serde::Deserialize;

use crate::error::WalletError;

/// Default number of re-plans after a stale-snapshot commit.
pub const DEFAULT_MAX_COMMIT_RETRIES: u32 = 3;

/// Default cap on queued, not yet issued, mint denominations.
pub const DEFAULT_MINT_QUEUE_LIMIT: usize = 1024;

/// Configuration for a [`Wallet`](crate::wallet::Wallet).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// How many times a spend re-plans from a fresh snapshot after the
    /// inventory changed under it. Zero means a single attempt.
    pub max_commit_retries: u32,
    /// Maximum number of denominations waiting in the mint queue.
    pub mint_queue_limit: usize,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            max_commit_retries: DEFAULT_MAX_COMMIT_RETRIES,
            mint_queue_limit: DEFAULT_MINT_QUEUE_LIMIT,
        }
    }
}

impl WalletConfig {
    /// Preset that surfaces the first commit race instead of re-planning.
    pub fn no_retry() -> Self {
        Self {
            max_commit_retries: 0,
            ..Self::default()
        }
    }

    /// Parse from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, WalletError> {
        serde_json::from_str(json).map_err(|e| WalletError::Serialization(e.to_string()))
    }

    /// Total plan/commit rounds a spend may take.
    pub fn max_attempts(&self) -> u32 {
        self.max_commit_retries.saturating_add(1)
    }
}
