use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;
use unshape_factor_push::{FactorPush, PrimeCache, SimulationParams};
use unshape_primes::{factorize, gpf};

// ============================================================================
// Prime queries
// ============================================================================

fn bench_gpf(c: &mut Criterion) {
    c.bench_function("gpf_1_to_10000", |b| {
        b.iter(|| {
            for n in 1..10_000 {
                black_box(gpf(black_box(n)));
            }
        })
    });

    let cache = PrimeCache::new();
    for n in 1..10_000 {
        cache.gpf(n);
    }
    c.bench_function("gpf_1_to_10000_warm_cache", |b| {
        b.iter(|| {
            for n in 1..10_000 {
                black_box(cache.gpf(black_box(n)));
            }
        })
    });
}

fn bench_factorize(c: &mut Criterion) {
    c.bench_function("factorize_1_to_10000", |b| {
        b.iter(|| {
            for n in 1..10_000 {
                black_box(factorize(black_box(n)));
            }
        })
    });
}

// ============================================================================
// Grid generation
// ============================================================================

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for (count, max_rows) in [(20, 30), (100, 200)] {
        let params = SimulationParams::new(count, 1, 1, max_rows);
        let id = format!("{count}x{max_rows}");

        group.bench_with_input(BenchmarkId::new("cold", &id), &params, |b, params| {
            b.iter(|| black_box(FactorPush::new().generate(params)))
        });

        let engine = FactorPush::with_cache(Arc::new(PrimeCache::new()));
        group.bench_with_input(BenchmarkId::new("warm", &id), &params, |b, params| {
            b.iter(|| black_box(engine.generate(params)))
        });

        group.bench_with_input(BenchmarkId::new("uncached", &id), &params, |b, params| {
            let engine = FactorPush::uncached();
            b.iter(|| black_box(engine.generate(params)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gpf, bench_factorize, bench_generate);
criterion_main!(benches);
