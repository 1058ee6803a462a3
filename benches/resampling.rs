use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_distr::Normal;
use resample_stats::prelude::*;

/// Generate normal data
fn generate_normal_data(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_quantile_estimation(c: &mut Criterion) {
    let mut group = c.benchmark_group("QuantileEstimation");
    let sizes = [100, 1000, 10_000];

    for &size in &sizes {
        let data = generate_normal_data(size, 100.0, 15.0, 42);

        group.bench_with_input(BenchmarkId::new("median", size), &data, |b, data| {
            b.iter(|| LinearInterp.quantile(black_box(data), 0.5))
        });

        group.bench_with_input(BenchmarkId::new("quartiles", size), &data, |b, data| {
            b.iter(|| LinearInterp.quantiles(black_box(data), &[0.25, 0.5, 0.75]))
        });
    }

    group.finish();
}

fn bench_bootstrap_ci(c: &mut Criterion) {
    let mut group = c.benchmark_group("BootstrapCi");
    group.sample_size(10);
    let n_resamples = [200, 1000];

    let data = generate_normal_data(500, 100.0, 15.0, 42);

    for &n_resample in &n_resamples {
        let engine = QuantileCi::median(LinearInterp)
            .with_resamples(n_resample)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::new("median", n_resample),
            &data,
            |b, data| b.iter(|| engine.ci(black_box(data))),
        );
    }

    group.finish();
}

fn bench_permutation_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("PermutationTest");
    group.sample_size(10);
    let n_resamples = [200, 1000];

    let values = generate_normal_data(500, 100.0, 15.0, 42);
    let labels: Vec<u8> = (0..values.len()).map(|i| u8::from(i % 2 == 0)).collect();

    for &n_resample in &n_resamples {
        let engine = QuantilePermTest::median(LinearInterp)
            .with_alternative(Alternative::Greater)
            .with_resamples(n_resample)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::new("median_shift", n_resample),
            &(&values, &labels),
            |b, (values, labels)| {
                b.iter(|| engine.test(black_box(*values), black_box(*labels)))
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_quantile_estimation,
    bench_bootstrap_ci,
    bench_permutation_test
);
criterion_main!(benches);
