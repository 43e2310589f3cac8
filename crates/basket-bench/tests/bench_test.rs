//! Tests for basket-bench fixtures.

use basket_bench::fixtures::{generate_baskets, FixtureSize, SimpleRng};
use basket_core::types::RuleMetric;
use basket_mining::{encode, AnalysisSettings, BasketAnalysis};

#[test]
fn fixture_micro_creates_100_baskets() {
    let fixture = generate_baskets(FixtureSize::Micro, 42);
    assert_eq!(fixture.transactions, 100);
    assert!(fixture.records.len() >= 100);
    assert!(fixture.distinct_items > 1);
}

#[test]
fn fixture_deterministic_same_seed() {
    let f1 = generate_baskets(FixtureSize::Small, 42);
    let f2 = generate_baskets(FixtureSize::Small, 42);
    assert_eq!(f1.records, f2.records);
}

#[test]
fn fixture_different_seeds_differ() {
    let f1 = generate_baskets(FixtureSize::Small, 42);
    let f2 = generate_baskets(FixtureSize::Small, 99);
    assert_ne!(f1.records, f2.records);
}

#[test]
fn fixture_encodes_to_one_row_per_basket() {
    let fixture = generate_baskets(FixtureSize::Small, 5);
    let matrix = encode(fixture.records.iter().copied()).unwrap();
    assert_eq!(matrix.transaction_count(), fixture.transactions);
    assert_eq!(matrix.item_count(), fixture.distinct_items);
}

#[test]
fn companion_items_surface_as_rules() {
    let fixture = generate_baskets(FixtureSize::Medium, 11);
    let settings = AnalysisSettings::new(0.01)
        .with_metric(RuleMetric::Lift)
        .with_min_threshold(1.0);
    let result = BasketAnalysis::new(settings)
        .run(fixture.records.iter().copied())
        .unwrap();

    let cake = result.find_rules_for_labels(&["Cake"]);
    assert!(!cake.is_empty());
    let best = result.recommend_for_labels(&["Cake"]).unwrap();
    assert!(best.lift >= 1.0);
}

#[test]
fn rng_deterministic() {
    let mut r1 = SimpleRng::new(42);
    let mut r2 = SimpleRng::new(42);
    for _ in 0..100 {
        assert_eq!(r1.next_u64(), r2.next_u64());
    }
    assert_ne!(SimpleRng::new(0).next_u64(), 0);
}
