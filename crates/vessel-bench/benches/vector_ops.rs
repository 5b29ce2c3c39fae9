//! Criterion micro-benchmarks for growth, insertion, erasure, and copy.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use vessel_bench::{filled, insert_positions};
use vessel_buf::{CloneRelocate, GrowthPolicy, Relocate, Vector};

/// Benchmark: 10K appends from empty, geometric growth vs one exact reserve.
fn bench_push_10k(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_10k");
    group.bench_function("doubling", |b| {
        b.iter(|| {
            let mut v: Vector<u64> = Vector::new();
            for i in 0..10_000u64 {
                v.push(i);
            }
            black_box(v.len());
        });
    });
    group.bench_function("reserved", |b| {
        b.iter(|| {
            let mut v: Vector<u64> = Vector::new();
            v.reserve(10_000);
            for i in 0..10_000u64 {
                v.push(i);
            }
            black_box(v.len());
        });
    });
    group.bench_function("factor_4", |b| {
        b.iter(|| {
            let mut v: Vector<u64> = Vector::with_growth(GrowthPolicy::new(4, 16)).unwrap();
            for i in 0..10_000u64 {
                v.push(i);
            }
            black_box(v.len());
        });
    });
    group.finish();
}

/// Benchmark: reallocating a full vector of 1K strings, move vs copy transfer.
fn bench_reallocate_1k(c: &mut Criterion) {
    let mut group = c.benchmark_group("reallocate_1k_strings");
    group.bench_function("relocate", |b| {
        b.iter_batched(
            || filled::<Relocate>(1_000),
            |mut v| {
                v.push(String::new());
                black_box(v)
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("clone_relocate", |b| {
        b.iter_batched(
            || filled::<CloneRelocate>(1_000),
            |mut v| {
                v.push(String::new());
                black_box(v)
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

/// Benchmark: 1K insertions at deterministic pseudo-random positions.
fn bench_insert_random_1k(c: &mut Criterion) {
    let positions = insert_positions(0, 1_000, 42);
    c.bench_function("insert_random_1k", |b| {
        b.iter(|| {
            let mut v: Vector<u32> = Vector::new();
            for (i, &pos) in positions.iter().enumerate() {
                v.insert(pos, i as u32);
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: erase from the front of a 1K vector until empty.
fn bench_erase_front_1k(c: &mut Criterion) {
    c.bench_function("erase_front_1k", |b| {
        b.iter_batched(
            || (0..1_000u32).collect::<Vector<u32>>(),
            |mut v| {
                while !v.is_empty() {
                    v.erase(0);
                }
                black_box(v)
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: deep copy and in-place copy-assignment of 1K strings.
fn bench_copy_1k(c: &mut Criterion) {
    let source = filled::<Relocate>(1_000);
    let mut group = c.benchmark_group("copy_1k_strings");
    group.bench_function("clone", |b| {
        b.iter(|| black_box(source.clone()));
    });
    group.bench_function("clone_from_in_place", |b| {
        let mut target = filled::<Relocate>(1_000);
        b.iter(|| {
            target.clone_from(&source);
            black_box(target.len());
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_push_10k,
    bench_reallocate_1k,
    bench_insert_random_1k,
    bench_erase_front_1k,
    bench_copy_1k
);
criterion_main!(benches);
