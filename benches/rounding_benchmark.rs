// ============================================================================
// Rounding Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Place Resolution - Isolates the name-to-offset lookup
// 2. Full Rounding - End-to-end round_to_place across place names
// 3. Pre-resolved Rounding - round_at with the lookup hoisted out
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use utilkit::numeric::{round_at, round_to_place, Place};

fn benchmark_place_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_resolution");

    for name in ["ones", " Hundred Thousandths ", "trillionths"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, name| {
            b.iter(|| Place::resolve(black_box(name)));
        });
    }

    group.finish();
}

fn benchmark_round_to_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_to_place");

    for name in ["ones", "tens", "hundredths", "trillionths"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, name| {
            b.iter(|| round_to_place(black_box(123_456.789012), name).unwrap());
        });
    }

    group.finish();
}

fn benchmark_round_at(c: &mut Criterion) {
    let place = Place::resolve("hundredths").unwrap();

    c.bench_function("round_at_hundredths", |b| {
        b.iter(|| round_at(black_box(123_456.789012), place).unwrap());
    });
}

criterion_group!(
    benches,
    benchmark_place_resolution,
    benchmark_round_to_place,
    benchmark_round_at
);
criterion_main!(benches);
