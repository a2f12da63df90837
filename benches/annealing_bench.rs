//! Criterion benchmarks for the N-Queens annealer.
//!
//! Measures the energy function on its own and full seeded runs, so
//! schedule changes and energy-scan changes show up separately.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nqueens_anneal::{energy, AnnealingConfig, AnnealingRunner, Board};

fn bench_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy");

    for &n in &[8usize, 16, 32, 64] {
        let board = Board::identity(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| black_box(energy(black_box(board))))
        });
    }
    group.finish();
}

fn bench_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("annealing");
    group.sample_size(10);

    for &n in &[8usize, 10, 12] {
        let config = AnnealingConfig::new()
            .with_board_size(n)
            .with_cooling_rate(0.999)
            .with_max_iterations(10_000)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, config| {
            b.iter(|| {
                let result = AnnealingRunner::new(config.clone()).run();
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_energy, bench_annealing);
criterion_main!(benches);
