//! Performance benchmarks for the Childcare Subsidy Engine.
//!
//! This benchmark suite measures:
//! - A household with a single child
//! - A household with ten children
//! - Batches of households against one loaded configuration
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use subsidy_engine::calculation::calculate;
use subsidy_engine::config::ConfigLoader;
use subsidy_engine::models::{CalculationRequest, CareCategory, ChildInput, MunicipalSupplement};

/// Loads the shipped configuration.
fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config").expect("Failed to load config")
}

/// Creates a request with `child_count` children of varying care arrangements.
fn create_request(child_count: usize, income: i64) -> CalculationRequest {
    let categories = CareCategory::ALL;

    let children = (0..child_count)
        .map(|i| ChildInput {
            care_category: categories[i % categories.len()],
            monthly_hours: Decimal::from(40 + (i as i64 * 23) % 220),
            hourly_rate: Decimal::new(750 + (i as i64 * 65) % 600, 2),
        })
        .collect();

    CalculationRequest {
        year: 2025,
        household_income: Decimal::from(income),
        municipal_supplement: MunicipalSupplement::active(Decimal::from(5)),
        children,
    }
}

/// Benchmark: single child household.
fn bench_single_child(c: &mut Criterion) {
    let config = load_config();
    let request = create_request(1, 20000);

    c.bench_function("single_child", |b| {
        b.iter(|| black_box(calculate(black_box(&request), &config)))
    });
}

/// Benchmark: ten children, the largest household accepted upstream.
fn bench_ten_children(c: &mut Criterion) {
    let config = load_config();
    let request = create_request(10, 40000);

    c.bench_function("ten_children", |b| {
        b.iter(|| black_box(calculate(black_box(&request), &config)))
    });
}

/// Benchmark: batches of households across the income range.
fn bench_batches(c: &mut Criterion) {
    let config = load_config();
    let mut group = c.benchmark_group("household_batch");

    for batch_size in [100usize, 1000] {
        let requests: Vec<CalculationRequest> = (0..batch_size)
            .map(|i| create_request(1 + i % 4, (i as i64 * 97) % 100_000))
            .collect();

        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &requests,
            |b, requests| {
                b.iter(|| {
                    for request in requests {
                        let _ = black_box(calculate(request, &config));
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_child, bench_ten_children, bench_batches);
criterion_main!(benches);
