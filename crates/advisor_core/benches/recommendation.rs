//! Recommendation benchmarks for advisor_core.
//!
//! Run with: `cargo bench -p advisor_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use advisor_core::prelude::*;
use advisor_test_utils::fixtures::{catalog_of, plan_in};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic_catalog(size: u32) -> PlanCatalog {
    let regions = ["Germany, Finland", "USA", "USA, Japan", "Singapore"];
    catalog_of(
        (0..size)
            .map(|i| {
                plan_in(
                    &format!("plan-{i}"),
                    1 + i % 16,
                    f64::from(2 + (i % 8) * 4),
                    4.5 + f64::from(i % 40) * 2.5,
                    regions[(i % 4) as usize],
                )
            })
            .collect(),
    )
}

/// End-to-end recommendation over catalogs of increasing size.
pub fn recommend_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_plans");
    let prefs = UserPreferences::new(30, ModLevel::Light).with_region("usa");

    for size in [20, 200, 2000] {
        let catalog = synthetic_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| recommend_plans(black_box(catalog), black_box(&prefs)));
        });
    }
    group.finish();
}

/// Tier-class browsing and cost estimation over the bundled data.
pub fn bundled_benchmark(c: &mut Criterion) {
    let plans = PlanCatalog::bundled().expect("bundled plans should load");
    let tiers = TierCatalog::bundled().expect("bundled tiers should load");

    c.bench_function("plans_for_tier_class", |b| {
        b.iter(|| {
            for class in TierClass::ALL {
                black_box(plans_for_tier_class(&plans, class, 6));
            }
        });
    });

    c.bench_function("compare_all_tiers", |b| {
        b.iter(|| compare_all_tiers(black_box(&tiers), black_box(25)));
    });

    c.bench_function("calculate_cost", |b| {
        b.iter(|| calculate_cost(black_box(19.99), black_box(12), None));
    });
}

criterion_group!(benches, recommend_benchmark, bundled_benchmark);
criterion_main!(benches);
