//! Benchmarks for groupstats
//!
//! Run with: cargo bench --features full

// Require all components for benchmarks
#[cfg(not(all(feature = "quantiles", feature = "statistics", feature = "dispatch")))]
compile_error!("Benchmarks require all features. Run: cargo bench --features full");

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use groupstats::dispatch::{dispatch_by_code, dispatch_by_name};
use groupstats::quantiles::{iqr, median, quantile, select_nth};
use groupstats::statistics::{kurtosis, sd, skewness, sum};
use groupstats::{Group, Statistic};

const SIZES: [usize; 3] = [100, 10_000, 1_000_000];

fn scrambled(n: usize) -> Vec<f64> {
    let mut state = 0x2545_f491_4f6c_dd1d_u64;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect()
}

// ============================================================================
// Selection Benchmarks
// ============================================================================

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");

    for n in SIZES {
        let data = scrambled(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("middle_rank_{}", n), |b| {
            b.iter_batched(
                || data.clone(),
                |mut work| black_box(select_nth(&mut work, n / 2)),
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("sort_baseline_{}", n), |b| {
            b.iter_batched(
                || data.clone(),
                |mut work| {
                    work.sort_unstable_by(|a, b| a.total_cmp(b));
                    black_box(work[n / 2])
                },
                BatchSize::LargeInput,
            );
        });
    }

    let sorted: Vec<f64> = (0..100_000).map(|i| i as f64).collect();
    group.throughput(Throughput::Elements(sorted.len() as u64));
    group.bench_function("middle_rank_presorted", |b| {
        b.iter_batched(
            || sorted.clone(),
            |mut work| black_box(select_nth(&mut work, 50_000)),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ============================================================================
// Quantile Benchmarks
// ============================================================================

fn bench_quantiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantiles");
    let data = scrambled(10_000);
    group.throughput(Throughput::Elements(data.len() as u64));

    group.bench_function("median", |b| {
        b.iter_batched(
            || data.clone(),
            |mut work| black_box(median(&mut work)),
            BatchSize::LargeInput,
        );
    });

    for q in [1.0, 37.5, 99.0, 100.0] {
        group.bench_function(format!("p{}", q), |b| {
            b.iter_batched(
                || data.clone(),
                |mut work| black_box(quantile(&mut work, q)),
                BatchSize::LargeInput,
            );
        });
    }

    group.bench_function("iqr", |b| {
        b.iter_batched(
            || data.clone(),
            |mut work| black_box(iqr(&mut work)),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ============================================================================
// Statistics Benchmarks
// ============================================================================

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    let data = scrambled(10_000);
    group.throughput(Throughput::Elements(data.len() as u64));

    group.bench_function("sum", |b| b.iter(|| black_box(sum(black_box(&data)))));
    group.bench_function("sd", |b| b.iter(|| black_box(sd(black_box(&data)))));
    group.bench_function("skewness", |b| {
        b.iter(|| black_box(skewness(black_box(&data))))
    });
    group.bench_function("kurtosis", |b| {
        b.iter(|| black_box(kurtosis(black_box(&data))))
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let data = scrambled(1_000);
    group.throughput(Throughput::Elements(data.len() as u64));

    group.bench_function("by_name_mean", |b| {
        let mut work = data.clone();
        b.iter(|| black_box(dispatch_by_name(black_box("mean"), &mut work)));
    });

    group.bench_function("by_code_mean", |b| {
        let mut work = data.clone();
        b.iter(|| black_box(dispatch_by_code(black_box(-2.0), &mut work)));
    });

    group.bench_function("by_name_percentile", |b| {
        b.iter_batched(
            || data.clone(),
            |mut work| black_box(dispatch_by_name("90", &mut work)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// Group Summary Benchmarks
// ============================================================================

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    let request = [
        Statistic::Mean,
        Statistic::Sd,
        Statistic::Min,
        Statistic::Median,
        Statistic::Percentile(10.0),
        Statistic::Percentile(90.0),
        Statistic::Iqr,
    ];

    for n in [100, 10_000] {
        let data = scrambled(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("seven_statistics_{}", n), |b| {
            b.iter_batched(
                || data.clone(),
                |mut work| {
                    let mut g = Group::whole(&mut work).unwrap();
                    black_box(g.summarize(&request))
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(
    benches,
    bench_select,
    bench_quantiles,
    bench_statistics,
    bench_dispatch,
    bench_summarize,
);

criterion_main!(benches);
