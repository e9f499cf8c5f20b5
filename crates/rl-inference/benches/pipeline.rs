use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn bench_pipeline(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sample = rl_prob::rayleigh::sample_n(&mut rng, 10_000).unwrap();

    c.bench_function("sample_n_10k", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(rl_prob::rayleigh::sample_n(&mut rng, 10_000).unwrap()))
    });

    c.bench_function("histogram_10k_12bins", |b| {
        b.iter(|| black_box(rl_inference::histogram::histogram(&sample, 12).unwrap()))
    });

    let hist = rl_inference::histogram::histogram(&sample, 12).unwrap();
    c.bench_function("chi_squared_12bins", |b| {
        b.iter(|| black_box(rl_inference::gof::chi_squared(&hist).unwrap()))
    });

    c.bench_function("event_sequence_10k", |b| {
        b.iter(|| black_box(rl_inference::arrivals::event_sequence(&sample).unwrap()))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
