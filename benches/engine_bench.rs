//! Full-pipeline and per-component timings over realistic history lengths.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use forecourt::trends::detect_seasonality;
use forecourt::{AnalyticsEngine, EngineConfig, FuelGrade, FuelLine, PeriodRecord};
use std::hint::black_box;

fn sample_record() -> PeriodRecord {
    PeriodRecord {
        shop_revenue: 42_000.0,
        shop_customers: 3_100.0,
        total_customers: 7_800.0,
        labor_cost: 18_500.0,
        overhead: 6_200.0,
        fixed_costs: 11_000.0,
        target_volume: 95_000.0,
        period_days: 30.0,
        fuels: vec![
            FuelLine::new(FuelGrade::Petrol95, 52_000.0, 1_092_000.0, 1_014_000.0),
            FuelLine::new(FuelGrade::DieselEx, 38_000.0, 767_600.0, 718_200.0),
        ],
        ..PeriodRecord::fuel(90_000.0, 1_859_600.0, 1_732_200.0)
    }
}

fn history(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let phase = (i % 12) as f64;
            3_000.0 + 4.0 * i as f64 + 250.0 * (phase * std::f64::consts::PI / 6.0).sin()
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let engine = AnalyticsEngine::new(EngineConfig::default()).unwrap();
    let record = sample_record();
    let mut group = c.benchmark_group("analyze");

    for len in [12, 60, 365] {
        let data = history(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| engine.analyze(black_box(&record), black_box(data), 6))
        });
    }
    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let engine = AnalyticsEngine::new(EngineConfig::default()).unwrap();
    let record = sample_record();
    let data = history(365);

    c.bench_function("calculate_metrics", |b| {
        b.iter(|| engine.calculate_metrics(black_box(&record)))
    });
    c.bench_function("analyze_trends_365", |b| {
        b.iter(|| engine.analyze_trends(black_box(&data)))
    });
    c.bench_function("detect_seasonality_365", |b| {
        b.iter(|| detect_seasonality(black_box(&data), 12))
    });
    c.bench_function("generate_forecasts_365", |b| {
        b.iter(|| engine.generate_forecasts(black_box(&data), 30))
    });
}

criterion_group!(benches, bench_analyze, bench_components);
criterion_main!(benches);
