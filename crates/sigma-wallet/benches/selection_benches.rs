//! Criterion benchmarks for coin selection and inventory commit.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sigma_core::constants::COIN;
use sigma_core::denomination::Denomination;
use sigma_core::traits::CoinInventory;
use sigma_core::types::{
    CoinRecord, DenominationCounts, InventorySnapshot, PublicCoin, SpendSecret,
};
use sigma_wallet::coin_selection::{plan_mint, CoinSelector};
use sigma_wallet::inventory::MemoryInventory;

fn rich_snapshot() -> InventorySnapshot {
    InventorySnapshot::new(
        DenominationCounts::from_pairs(&[
            (Denomination::D0_1, 50),
            (Denomination::D0_5, 50),
            (Denomination::D1, 50),
            (Denomination::D10, 50),
            (Denomination::D100, 50),
        ]),
        0,
    )
}

fn bench_select_coarse(c: &mut Criterion) {
    let snap = rich_snapshot();
    c.bench_function("select_coarse_111.75", |b| {
        b.iter(|| CoinSelector::select(black_box(111 * COIN + 75 * COIN / 100), &snap))
    });
}

fn bench_select_fine(c: &mut Criterion) {
    let snap = InventorySnapshot::new(
        DenominationCounts::from_pairs(&[
            (Denomination::D0_1, 2),
            (Denomination::D0_5, 1),
            (Denomination::D1, 1),
            (Denomination::D10, 1),
            (Denomination::D100, 1),
        ]),
        0,
    );
    c.bench_function("select_fine_111.7", |b| {
        b.iter(|| CoinSelector::select(black_box(111 * COIN + 7 * COIN / 10), &snap))
    });
}

fn bench_plan_mint(c: &mut Criterion) {
    c.bench_function("plan_mint_987.6", |b| {
        b.iter(|| plan_mint(black_box(987 * COIN + 6 * COIN / 10)))
    });
}

fn bench_snapshot_and_commit(c: &mut Criterion) {
    c.bench_function("snapshot_commit_4_coins", |b| {
        b.iter_batched(
            || {
                let inv = MemoryInventory::new();
                for i in 0u32..40 {
                    let d = Denomination::ALL[(i % 5) as usize];
                    let record = CoinRecord::new(
                        d,
                        PublicCoin(i.to_le_bytes().to_vec()),
                        SpendSecret {
                            serial_number: [i as u8; 32],
                            randomness: [0; 32],
                        },
                    );
                    inv.add_coin(record).unwrap();
                }
                inv
            },
            |inv| {
                let snap = inv.snapshot();
                let plan = CoinSelector::select(112 * COIN, &snap).unwrap();
                inv.commit(&plan.spend, plan.generation).unwrap()
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_select_coarse,
    bench_select_fine,
    bench_plan_mint,
    bench_snapshot_and_commit,
);
criterion_main!(benches);
