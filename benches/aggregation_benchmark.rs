use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geoscore::synthetic::SyntheticLogGenerator;
use geoscore::{aggregate, aggregate_value, AggregationOptions, ScoringMode};
use std::hint::black_box;

fn synthetic_log(countries: usize) -> geoscore::Log {
    let names: Vec<String> = (0..countries).map(|i| format!("Country {i}")).collect();
    SyntheticLogGenerator::seeded(42).generate(&names)
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for size in [100, 1_000, 10_000] {
        let log = synthetic_log(size);
        for mode in ScoringMode::ALL {
            group.bench_with_input(BenchmarkId::new(mode.as_str(), size), &log, |b, log| {
                b.iter(|| aggregate(black_box(log), mode))
            });
        }
    }
    group.finish();
}

fn bench_validate_and_aggregate(c: &mut Criterion) {
    let raw = serde_json::to_value(synthetic_log(1_000)).unwrap();
    let options = AggregationOptions::new(ScoringMode::Mpe);

    c.bench_function("validate_and_aggregate_1000", |b| {
        b.iter(|| aggregate_value(black_box(&raw), &options).unwrap())
    });
}

criterion_group!(benches, bench_aggregate, bench_validate_and_aggregate);
criterion_main!(benches);
