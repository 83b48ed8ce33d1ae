//! Benchmarks for the row packer.
//!
//! Run with: cargo bench -p fgrid-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fgrid_core::{Dimensions, ItemStore};
use fgrid_layout::{FluidGrid, RowPacker};
use std::hint::black_box;

/// Build a store with `n` items cycling through common photo aspect
/// ratios (landscape, portrait, square, panorama).
fn make_store(n: usize) -> ItemStore {
    let raw = (0..n).map(|i| match i % 4 {
        0 => Dimensions::new(1600.0, 1200.0),
        1 => Dimensions::new(1200.0, 1600.0),
        2 => Dimensions::new(1000.0, 1000.0),
        3 => Dimensions::new(2400.0, 800.0),
        _ => unreachable!(),
    });
    ItemStore::build(raw, 250.0)
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/pack");
    let packer = RowPacker::new().gutter(8.0);

    for n in [10, 100, 1_000, 10_000] {
        let store = make_store(n);
        group.bench_with_input(BenchmarkId::new("items", n), &store, |b, store| {
            b.iter(|| black_box(packer.pack(store.items(), 1280.0)))
        });
    }

    group.finish();
}

fn bench_grid_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/grid_update");

    for n in [100, 1_000] {
        let raw: Vec<Dimensions> = (0..n)
            .map(|i| Dimensions::new(800.0 + (i % 7) as f64 * 100.0, 600.0))
            .collect();
        let grid = FluidGrid::new(raw, RowPacker::new().gutter(8.0)).unwrap();
        group.bench_with_input(BenchmarkId::new("items", n), &grid, |b, grid| {
            b.iter(|| black_box(grid.update(1280.0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack, bench_grid_update);
criterion_main!(benches);
