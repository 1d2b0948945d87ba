//! Wallet composition: selection, commit, change and mint queue.
//!
//! The [`Wallet`] drives the plan/commit cycle against a shared
//! [`CoinInventory`] handle. Planning reads a snapshot and never mutates;
//! committing is a single fallible call keyed by the snapshot generation. If
//! another spender moved the inventory in between, the wallet re-plans from a
//! fresh snapshot, up to the configured retry budget.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{info, warn};

use sigma_core::amount::format_amount;
use sigma_core::denomination::Denomination;
use sigma_core::error::InventoryError;
use sigma_core::traits::{CoinInventory, CoinIssuer};
use sigma_core::types::{CoinRecord, DenominationCounts};

use crate::coin_selection::{plan_mint_counts, CoinSelector, SelectionPlan};
use crate::config::WalletConfig;
use crate::error::WalletError;

/// Balance summary of unused coins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletBalance {
    /// Total value in smallest units.
    pub value: u64,
    /// Number of unused coins.
    pub coin_count: u64,
    /// Unused coins per denomination.
    pub by_denomination: DenominationCounts,
}

impl WalletBalance {
    /// Value as a decimal coin string (display helper).
    pub fn display_value(&self) -> String {
        format_amount(self.value)
    }
}

/// A committed spend: the plan and the coin records it consumed.
#[derive(Debug, Clone)]
pub struct SpendOutcome {
    /// The plan that was committed.
    pub plan: SelectionPlan,
    /// Records claimed from the inventory, all flagged used.
    pub coins: Vec<CoinRecord>,
}

/// Spending wallet over a shared coin inventory.
pub struct Wallet {
    inventory: Arc<dyn CoinInventory>,
    config: WalletConfig,
    /// Denominations decided on but not yet issued, oldest first.
    pending_mints: VecDeque<Denomination>,
}

impl Wallet {
    pub fn new(inventory: Arc<dyn CoinInventory>, config: WalletConfig) -> Self {
        Self {
            inventory,
            config,
            pending_mints: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// The shared inventory handle.
    pub fn inventory(&self) -> &Arc<dyn CoinInventory> {
        &self.inventory
    }

    /// Current balance from a fresh snapshot.
    pub fn balance(&self) -> WalletBalance {
        let snapshot = self.inventory.snapshot();
        WalletBalance {
            value: snapshot.total_value(),
            coin_count: snapshot.counts.total_coins(),
            by_denomination: snapshot.counts,
        }
    }

    /// Plan a spend of `amount` without touching the inventory.
    pub fn plan_spend(&self, amount: u64) -> Result<SelectionPlan, WalletError> {
        CoinSelector::select(amount, &self.inventory.snapshot())
    }

    /// Plan and commit a spend of `amount`.
    ///
    /// On success the claimed coins are returned and the change denominations
    /// join the mint queue. A commit that loses a race re-plans from a fresh
    /// snapshot; after `max_commit_retries` re-plans the spend gives up with
    /// [`WalletError::RetriesExhausted`]. Nothing is claimed on failure.
    pub fn spend(&mut self, amount: u64) -> Result<SpendOutcome, WalletError> {
        let attempts = self.config.max_attempts();

        for attempt in 1..=attempts {
            let plan = self.plan_spend(amount)?;
            self.ensure_mint_capacity(plan.mint.len() as u64)?;

            match self.inventory.commit(&plan.spend, plan.generation) {
                Ok(coins) => {
                    self.pending_mints.extend(plan.mint.iter().copied());
                    info!(
                        amount = %format_amount(amount),
                        spent = coins.len(),
                        change = plan.mint.len(),
                        path = ?plan.path,
                        "wallet: spend committed"
                    );
                    return Ok(SpendOutcome { plan, coins });
                }
                Err(InventoryError::StaleSnapshot { expected, actual }) => {
                    warn!(attempt, expected, actual, "wallet: inventory changed, re-planning");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(WalletError::RetriesExhausted { attempts })
    }

    /// Split a deposit `amount` into denominations and queue them for minting.
    ///
    /// `amount` must be a non-zero multiple of the smallest denomination.
    pub fn queue_mint(&mut self, amount: u64) -> Result<Vec<Denomination>, WalletError> {
        if amount == 0 {
            return Err(WalletError::InvalidAmount("mint amount must be non-zero".into()));
        }
        let counts = plan_mint_counts(amount)?;
        self.ensure_mint_capacity(counts.total_coins())?;
        let denominations = counts.to_denominations();
        self.pending_mints.extend(denominations.iter().copied());
        Ok(denominations)
    }

    /// Denominations waiting to be issued, oldest first.
    pub fn pending_mints(&self) -> Vec<Denomination> {
        self.pending_mints.iter().copied().collect()
    }

    /// Issue every queued denomination and add the new coins to inventory.
    ///
    /// Stops at the first failure. If issuance fails, that denomination and
    /// everything after it stay queued. If the coin was issued but the
    /// inventory refuses it, the denomination leaves the queue and the record
    /// comes back in [`WalletError::MintNotStored`]. Returns how many coins
    /// were added.
    pub fn complete_mints(&mut self, issuer: &dyn CoinIssuer) -> Result<usize, WalletError> {
        let mut added = 0;
        while let Some(&denomination) = self.pending_mints.front() {
            let record = issuer.issue(denomination)?;
            self.pending_mints.pop_front();
            if let Err(source) = self.inventory.add_coin(record.clone()) {
                warn!(
                    denomination = %denomination,
                    coin = %record.id(),
                    error = %source,
                    "wallet: issued coin refused by inventory"
                );
                return Err(WalletError::MintNotStored {
                    record: Box::new(record),
                    source,
                });
            }
            added += 1;
        }
        if added > 0 {
            info!(added, "wallet: mints completed");
        }
        Ok(added)
    }

    fn ensure_mint_capacity(&self, extra: u64) -> Result<(), WalletError> {
        let pending = self.pending_mints.len();
        let extra = usize::try_from(extra).unwrap_or(usize::MAX);
        if pending.saturating_add(extra) > self.config.mint_queue_limit {
            return Err(WalletError::MintQueueFull {
                pending,
                limit: self.config.mint_queue_limit,
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("config", &self.config)
            .field("pending_mints", &self.pending_mints.len())
            .finish()
    }
}
