//! Mining benchmarks.
//!
//! Encode, support counting at several chunk sizes, Apriori, rule
//! generation and the full analysis over generated bakery baskets.
//! Run with: cargo bench -p basket-bench --bench mining_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use basket_bench::fixtures::{generate_baskets, FixtureSize};
use basket_core::types::RuleMetric;
use basket_mining::apriori::counting::count_items;
use basket_mining::{
    encode, generate_rules, AnalysisSettings, AprioriConfig, AprioriMiner, BasketAnalysis,
};

const SEED: u64 = 42;

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for size in [FixtureSize::Small, FixtureSize::Medium] {
        let fixture = generate_baskets(size, SEED);
        group.throughput(Throughput::Elements(fixture.records.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(fixture.transactions),
            &fixture.records,
            |b, records| b.iter(|| encode(records.iter().copied()).unwrap()),
        );
    }
    group.finish();
}

fn bench_count_chunks(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_items");
    let fixture = generate_baskets(FixtureSize::Large, SEED);
    let matrix = encode(fixture.records.iter().copied()).unwrap();
    for chunk in [256usize, 1024, 8192] {
        group.bench_with_input(BenchmarkId::from_parameter(chunk), &chunk, |b, &chunk| {
            b.iter(|| count_items(&matrix, chunk))
        });
    }
    group.finish();
}

fn bench_mine(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori");
    group.sample_size(20);
    let fixture = generate_baskets(FixtureSize::Medium, SEED);
    let matrix = encode(fixture.records.iter().copied()).unwrap();
    for min_support in [0.01, 0.05] {
        let miner = AprioriMiner::new(AprioriConfig::new(min_support).unwrap());
        group.bench_with_input(
            BenchmarkId::from_parameter(min_support),
            &min_support,
            |b, _| b.iter(|| miner.mine(&matrix).unwrap()),
        );
    }
    group.finish();
}

fn bench_rules(c: &mut Criterion) {
    let fixture = generate_baskets(FixtureSize::Medium, SEED);
    let matrix = encode(fixture.records.iter().copied()).unwrap();
    let frequent = AprioriMiner::new(AprioriConfig::new(0.01).unwrap())
        .mine(&matrix)
        .unwrap()
        .itemsets;
    c.bench_function("generate_rules_lift", |b| {
        b.iter(|| generate_rules(&frequent, RuleMetric::Lift, 1.0).unwrap())
    });
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    group.sample_size(10);
    let fixture = generate_baskets(FixtureSize::Large, SEED);
    let analysis = BasketAnalysis::new(
        AnalysisSettings::new(0.01)
            .with_metric(RuleMetric::Lift)
            .with_min_threshold(1.0),
    );
    group.throughput(Throughput::Elements(fixture.transactions as u64));
    group.bench_function("end_to_end_100k", |b| {
        b.iter(|| analysis.run(fixture.records.iter().copied()).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_count_chunks,
    bench_mine,
    bench_rules,
    bench_analysis
);
criterion_main!(benches);
