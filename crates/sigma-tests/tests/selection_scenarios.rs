//! End-to-end selection scenarios against a real inventory.
//!
//! Each case mints a fixed set of coins, asks the wallet to spend an amount,
//! and checks which denominations were spent and which are queued as change.

use std::sync::Arc;

use sigma_core::constants::COIN;
use sigma_core::denomination::Denomination;
use sigma_core::traits::CoinInventory;
use sigma_core::types::DenominationCounts;
use sigma_tests::helpers::*;
use sigma_wallet::{MemoryInventory, SelectionPath, Wallet, WalletConfig, WalletError};

fn wallet_with(counts: &DenominationCounts) -> (Wallet, Arc<MemoryInventory>) {
    let inventory = inventory_with(counts);
    (Wallet::new(inventory.clone(), WalletConfig::default()), inventory)
}

#[test]
fn no_coins_no_spend() {
    let (mut w, inventory) = wallet_with(&coin_set(0, 0, 0, 0, 0));
    let err = w.spend(TENTH).unwrap_err();
    assert_eq!(
        err,
        WalletError::InsufficientFunds {
            available: 0,
            need: TENTH
        }
    );
    assert_eq!(inventory.spent_count(), 0);
}

#[test]
fn different_denominations_all_spent() {
    let have = coin_set(2, 1, 1, 1, 1);
    let (mut w, inventory) = wallet_with(&have);

    let outcome = w.spend(111 * COIN + 7 * TENTH).unwrap();

    assert_eq!(outcome.plan.path, SelectionPath::Fine);
    assert_eq!(denominations_of(&outcome.coins), have);
    assert!(outcome.plan.mint.is_empty());
    assert!(w.pending_mints().is_empty());
    assert!(inventory.snapshot().counts.is_empty());
}

#[test]
fn round_up_spends_whole_coins_and_remints() {
    let (mut w, _) = wallet_with(&coin_set(5, 5, 5, 5, 5));

    // 111.75 is rounded up to 111.8
    let outcome = w.spend(111 * COIN + 7 * TENTH + 5 * COIN / 100).unwrap();

    assert_eq!(outcome.plan.required, 111 * COIN + 8 * TENTH);
    assert_eq!(denominations_of(&outcome.coins), coin_set(0, 0, 2, 1, 1));
    assert_eq!(mint_counts(&outcome.plan.mint), coin_set(2, 0, 0, 0, 0));
    assert_eq!(mint_counts(&w.pending_mints()), coin_set(2, 0, 0, 0, 0));
}

#[test]
fn not_enough_one_of_each() {
    let have = coin_set(1, 1, 1, 1, 1);
    assert_eq!(have.total_value(), 111 * COIN + 6 * TENTH);
    let (mut w, inventory) = wallet_with(&have);

    let err = w.spend(111 * COIN + 7 * TENTH).unwrap_err();

    assert!(matches!(err, WalletError::InsufficientFunds { .. }));
    assert_eq!(inventory.snapshot().counts, have);
}

#[test]
fn minimize_coins_spend_fit_amount() {
    let (mut w, _) = wallet_with(&coin_set(0, 0, 0, 10, 1));

    let outcome = w.spend(100 * COIN).unwrap();

    assert_eq!(denominations_of(&outcome.coins), coin_set(0, 0, 0, 0, 1));
    assert!(outcome.plan.mint.is_empty());
}

#[test]
fn minimize_coins_spend() {
    let (mut w, _) = wallet_with(&coin_set(1, 0, 7, 1, 1));

    let outcome = w.spend(17 * COIN).unwrap();

    assert_eq!(denominations_of(&outcome.coins), coin_set(0, 0, 7, 1, 0));
    assert!(outcome.plan.mint.is_empty());
}

#[test]
fn choose_smallest_enough() {
    let (mut w, inventory) = wallet_with(&coin_set(1, 1, 1, 1, 1));

    let outcome = w.spend(9 * TENTH).unwrap();

    assert_eq!(denominations_of(&outcome.coins), coin_set(0, 0, 1, 0, 0));
    assert_eq!(outcome.plan.mint, vec![Denomination::D0_1]);
    assert_eq!(inventory.count(Denomination::D0_1), 1);
    assert_eq!(inventory.count(Denomination::D0_5), 1);
}

#[test]
fn change_is_minted_back_into_inventory() {
    let (mut w, inventory) = wallet_with(&coin_set(0, 0, 1, 0, 0));

    w.spend(3 * TENTH).unwrap();
    assert_eq!(mint_counts(&w.pending_mints()), coin_set(2, 1, 0, 0, 0));

    let added = w.complete_mints(&RandomIssuer).unwrap();
    assert_eq!(added, 3);
    assert_eq!(inventory.balance(), 7 * TENTH);

    // The fractional change now funds a fine-path spend.
    let outcome = w.spend(6 * TENTH).unwrap();
    assert_eq!(outcome.plan.path, SelectionPath::Fine);
    assert_eq!(denominations_of(&outcome.coins), coin_set(1, 1, 0, 0, 0));
}

#[test]
fn spent_coins_are_never_reselected() {
    let (mut w, inventory) = wallet_with(&coin_set(0, 0, 3, 0, 0));

    let first = w.spend(2 * COIN).unwrap();
    let second = w.spend(COIN).unwrap();

    for coin in first.coins.iter().chain(second.coins.iter()) {
        assert!(inventory.is_spent(&coin.id()));
    }
    let first_ids: Vec<_> = first.coins.iter().map(|c| c.id()).collect();
    assert!(second.coins.iter().all(|c| !first_ids.contains(&c.id())));
    assert!(matches!(
        w.spend(COIN).unwrap_err(),
        WalletError::InsufficientFunds { .. }
    ));
}
