//! Criterion benchmarks for sampler_core.
//!
//! Benchmarks cover:
//! - Cache materialisation for varying sample counts
//! - Cached vs uncached scalar reads
//! - Composite (tensor) sampling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sampler_core::rng::{SampleCache, Tensor3};

/// Benchmark building caches of increasing size.
fn bench_materialisation(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_materialisation");

    for count in [1_000_i64, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("samples", count), &count, |b, &n| {
            b.iter(|| {
                let cache: SampleCache = SampleCache::new(black_box(42), n);
                black_box(cache.len())
            });
        });
    }

    group.finish();
}

/// Benchmark scalar reads from cached and uncached streams.
fn bench_scalar_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_reads");
    let n_reads = 10_000;

    for (label, count) in [("cached", 1_024_i64), ("uncached", -1)] {
        group.bench_function(label, |b| {
            let mut cache: SampleCache = SampleCache::new(42, count);
            b.iter(|| {
                let mut sum = 0.0;
                for _ in 0..n_reads {
                    sum += cache.next_scalar();
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

/// Benchmark nine-component tensor sampling.
fn bench_tensor_sampling(c: &mut Criterion) {
    c.bench_function("tensor_sample01", |b| {
        let mut cache: SampleCache = SampleCache::new(42, 4_096);
        b.iter(|| {
            let t: Tensor3 = cache.sample01();
            black_box(t)
        });
    });
}

criterion_group!(
    benches,
    bench_materialisation,
    bench_scalar_reads,
    bench_tensor_sampling
);
criterion_main!(benches);
