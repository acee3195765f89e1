use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::fixtures;
use pagesim::{run, sweep, Policy};

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");

    for len in [1_000, 10_000].iter() {
        let reference = fixtures::random(42, *len, 63);

        for policy in Policy::ALL {
            group.bench_with_input(
                BenchmarkId::new(policy.to_string(), len),
                &reference,
                |b, reference| b.iter(|| run(policy, black_box(reference), 16).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let reference = fixtures::random(7, 2_000, 31);
    let capacities: Vec<usize> = (1..=16).collect();

    c.bench_function("sweep_16_capacities", |b| {
        b.iter(|| sweep(black_box(&reference), &capacities, &Policy::ALL).unwrap())
    });
}

criterion_group!(benches, bench_policies, bench_sweep);
criterion_main!(benches);
