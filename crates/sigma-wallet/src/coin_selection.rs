//! Denomination-constrained coin selection.
//!
//! Coins are indivisible and exist only in the five fixed denominations, so
//! paying an amount means choosing a multiset of held denominations that adds
//! up to a rounded target, and re-minting whatever the rounding overshot.
//!
//! Selection runs in two phases against an [`InventorySnapshot`]:
//!
//! 1. **Coarse**: round the request up to a whole coin and cover it with
//!    1/10/100 coins only. The sub-coin rounding slack becomes change.
//! 2. **Fine**: if the coarse phase cannot exhaust its target, cover the
//!    request rounded to a tenth of a coin using all denominations. No change.
//!
//! Both phases use the same greedy: walk denominations largest first, skip any
//! worth more than what is still owed, otherwise take as many as are held and
//! fit. Every denomination value divides the next larger one, so the greedy
//! yields the fewest coins whenever it succeeds. Selection never touches
//! live records; committing a plan is the inventory's job.

use sigma_core::amount::round_up;
use sigma_core::constants::{COARSE_GRANULARITY, FINE_GRANULARITY};
use sigma_core::denomination::Denomination;
use sigma_core::types::{DenominationCounts, InventorySnapshot};
use tracing::debug;

use crate::error::WalletError;

/// Which covering phase produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPath {
    /// Whole-coin target covered by 1/10/100 coins, slack re-minted.
    Coarse,
    /// Tenth-of-coin target covered by any denominations, nothing re-minted.
    Fine,
}

/// Result of coin selection: how many coins of each denomination to spend
/// and which denominations to mint back as change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPlan {
    /// Amount originally requested, in smallest units.
    pub requested: u64,
    /// Request rounded up to the fine granularity.
    pub required: u64,
    /// Coins to spend, per denomination.
    pub spend: DenominationCounts,
    /// Change denominations to mint, largest first.
    pub mint: Vec<Denomination>,
    /// Phase that produced this plan.
    pub path: SelectionPath,
    /// Inventory generation the plan was computed against.
    pub generation: u64,
}

impl SelectionPlan {
    /// Total value of the coins to spend.
    pub fn spend_value(&self) -> u64 {
        self.spend.total_value()
    }

    /// Total value of the change to mint.
    pub fn mint_value(&self) -> u64 {
        self.mint
            .iter()
            .fold(0u64, |acc, d| acc.saturating_add(d.value()))
    }

    /// `spend == required + mint`.
    pub fn is_balanced(&self) -> bool {
        self.spend_value() == self.required.saturating_add(self.mint_value())
    }
}

/// Greedy cover of `target` by `denominations` (largest first), drawing at
/// most `available(d)` coins of each. Returns `None` unless the target is
/// met exactly.
fn cover(
    target: u64,
    denominations: &[Denomination],
    available: impl Fn(Denomination) -> u64,
) -> Option<DenominationCounts> {
    let mut remaining = target;
    let mut taken = DenominationCounts::new();

    for &d in denominations {
        let value = d.value();
        if value > remaining {
            continue;
        }
        let take = available(d).min(remaining / value);
        remaining -= take * value;
        taken.set(d, take);
    }

    (remaining == 0).then_some(taken)
}

/// Cover a whole-coin target with coarse denominations only.
pub fn coarse_cover(target: u64, counts: &DenominationCounts) -> Option<DenominationCounts> {
    debug_assert_eq!(target % COARSE_GRANULARITY, 0);
    cover(target, &Denomination::COARSE, |d| counts.get(d))
}

/// Cover a tenth-of-coin target with every denomination.
pub fn fine_cover(target: u64, counts: &DenominationCounts) -> Option<DenominationCounts> {
    debug_assert_eq!(target % FINE_GRANULARITY, 0);
    cover(target, &Denomination::ALL, |d| counts.get(d))
}

/// Decompose `value` into the fewest denominations that sum to it exactly,
/// with unlimited supply of each. Returned largest first.
///
/// Used both for change (always below one coin, so only 0.5 and 0.1 appear)
/// and for splitting a deposit amount into coins to mint.
///
/// # Examples
///
/// ```
/// use sigma_core::constants::COIN;
/// use sigma_core::denomination::Denomination;
/// use sigma_wallet::coin_selection::plan_mint;
///
/// let mint = plan_mint(COIN / 5).unwrap();
/// assert_eq!(mint, vec![Denomination::D0_1, Denomination::D0_1]);
/// ```
pub fn plan_mint(value: u64) -> Result<Vec<Denomination>, WalletError> {
    plan_mint_counts(value).map(|counts| counts.to_denominations())
}

/// Same decomposition as [`plan_mint`], as per-denomination counts.
///
/// Cost does not depend on the size of `value`, so callers can bound the
/// number of coins before expanding it.
pub fn plan_mint_counts(value: u64) -> Result<DenominationCounts, WalletError> {
    cover(value, &Denomination::ALL, |_| u64::MAX).ok_or_else(|| {
        WalletError::InvalidAmount(format!(
            "{value} is not a multiple of the smallest denomination"
        ))
    })
}

/// Coin selector over an inventory snapshot.
pub struct CoinSelector;

impl CoinSelector {
    /// Choose coins to spend for `amount` and the change to mint back.
    ///
    /// Tries the coarse phase first; whenever it succeeds, 0.1 and 0.5 coins
    /// are left untouched even if they would give an exact match. Falls back
    /// to the fine phase only when coarse coins run short. Never substitutes a
    /// larger coin than the greedy allows: a wallet holding only a 100 coin
    /// cannot pay 5.
    ///
    /// Returns [`WalletError::InvalidAmount`] for a zero or overflowing amount
    /// and [`WalletError::InsufficientFunds`] when both phases fail.
    pub fn select(amount: u64, snapshot: &InventorySnapshot) -> Result<SelectionPlan, WalletError> {
        if amount == 0 {
            return Err(WalletError::InvalidAmount("amount must be non-zero".into()));
        }

        let required = round_up(amount, FINE_GRANULARITY)
            .ok_or_else(|| WalletError::InvalidAmount(format!("{amount} overflows when rounded")))?;
        let coarse_target = round_up(required, COARSE_GRANULARITY)
            .ok_or_else(|| WalletError::InvalidAmount(format!("{amount} overflows when rounded")))?;

        if let Some(spend) = coarse_cover(coarse_target, &snapshot.counts) {
            let mint = plan_mint(coarse_target - required)?;
            debug!(
                amount,
                required,
                coarse_target,
                coins = spend.total_coins(),
                change = mint.len(),
                "coin_selection: coarse cover"
            );
            return Ok(SelectionPlan {
                requested: amount,
                required,
                spend,
                mint,
                path: SelectionPath::Coarse,
                generation: snapshot.generation,
            });
        }

        if let Some(spend) = fine_cover(required, &snapshot.counts) {
            debug!(
                amount,
                required,
                coins = spend.total_coins(),
                "coin_selection: fine cover"
            );
            return Ok(SelectionPlan {
                requested: amount,
                required,
                spend,
                mint: Vec::new(),
                path: SelectionPath::Fine,
                generation: snapshot.generation,
            });
        }

        debug!(amount, required, "coin_selection: no cover");
        Err(WalletError::InsufficientFunds {
            available: snapshot.total_value(),
            need: required,
        })
    }
}
