use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::VecDeque;
use treap_vec::TreapVec;

const N: usize = 10_000;

// ─── Helper functions to generate index sequences ───────────────────────────

/// Positions valid for a sequence that grows from 0 to `n` elements, one insert at a time.
fn random_insert_positions(n: usize) -> Vec<usize> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut positions = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for len in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        positions.push((x >> 33) as usize % (len + 1));
    }
    positions
}

/// Positions valid for a sequence that shrinks from `n` elements to 0, one removal at a time.
fn random_remove_positions(n: usize) -> Vec<usize> {
    let mut positions = Vec::with_capacity(n);
    let mut x: u64 = 54321;
    for len in (1..=n).rev() {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        positions.push((x >> 33) as usize % len);
    }
    positions
}

// ─── Insert Benchmarks ──────────────────────────────────────────────────────

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    group.bench_function(BenchmarkId::new("TreapVec", N), |b| {
        b.iter(|| {
            let mut seq = TreapVec::with_seed(1);
            for i in 0..N {
                seq.push_back(i);
            }
            seq
        });
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..N {
                vec.push(i);
            }
            vec
        });
    });

    group.finish();
}

fn bench_push_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_front");

    group.bench_function(BenchmarkId::new("TreapVec", N), |b| {
        b.iter(|| {
            let mut seq = TreapVec::with_seed(1);
            for i in 0..N {
                seq.push_front(i);
            }
            seq
        });
    });

    group.bench_function(BenchmarkId::new("VecDeque", N), |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..N {
                deque.push_front(i);
            }
            deque
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let positions = random_insert_positions(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("TreapVec", N), |b| {
        b.iter(|| {
            let mut seq = TreapVec::with_seed(1);
            for (i, &at) in positions.iter().enumerate() {
                seq.insert(at, i);
            }
            seq
        });
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for (i, &at) in positions.iter().enumerate() {
                vec.insert(at, i);
            }
            vec
        });
    });

    group.finish();
}

// ─── Read Benchmarks ────────────────────────────────────────────────────────

fn bench_get_random(c: &mut Criterion) {
    let positions = random_remove_positions(N);
    let seq: TreapVec<usize> = (0..N).collect();
    let vec: Vec<usize> = (0..N).collect();

    let mut group = c.benchmark_group("get_random");

    group.bench_function(BenchmarkId::new("TreapVec", N), |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for &at in &positions {
                sum = sum.wrapping_add(seq[at]);
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for &at in &positions {
                sum = sum.wrapping_add(vec[at]);
            }
            sum
        });
    });

    group.finish();
}

fn bench_iter(c: &mut Criterion) {
    let seq: TreapVec<usize> = (0..N).collect();
    let vec: Vec<usize> = (0..N).collect();

    let mut group = c.benchmark_group("iter");

    group.bench_function(BenchmarkId::new("TreapVec", N), |b| {
        b.iter(|| seq.iter().fold(0usize, |acc, &v| acc.wrapping_add(v)));
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter(|| vec.iter().fold(0usize, |acc, &v| acc.wrapping_add(v)));
    });

    group.finish();
}

// ─── Remove Benchmarks ──────────────────────────────────────────────────────

fn bench_remove_random(c: &mut Criterion) {
    let positions = random_remove_positions(N);
    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("TreapVec", N), |b| {
        b.iter_batched(
            || (0..N).collect::<TreapVec<usize>>(),
            |mut seq| {
                for &at in &positions {
                    seq.remove(at);
                }
                seq
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter_batched(
            || (0..N).collect::<Vec<usize>>(),
            |mut vec| {
                for &at in &positions {
                    vec.remove(at);
                }
                vec
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ─── Copy-on-write Benchmarks ───────────────────────────────────────────────

fn bench_clone_then_set(c: &mut Criterion) {
    let seq: TreapVec<usize> = (0..N).collect();
    let vec: Vec<usize> = (0..N).collect();

    let mut group = c.benchmark_group("clone_then_set");

    group.bench_function(BenchmarkId::new("TreapVec", N), |b| {
        b.iter(|| {
            let mut copy = seq.clone();
            copy.set(N / 2, 0);
            copy
        });
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter(|| {
            let mut copy = vec.clone();
            copy[N / 2] = 0;
            copy
        });
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_push_back, bench_push_front, bench_insert_random,);

criterion_group!(read_benches, bench_get_random, bench_iter,);

criterion_group!(remove_benches, bench_remove_random,);

criterion_group!(cow_benches, bench_clone_then_set,);

criterion_main!(insert_benches, read_benches, remove_benches, cow_benches,);
