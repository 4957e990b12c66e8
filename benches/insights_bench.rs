// ABOUTME: Criterion benchmarks for the per-event recomputation path
// ABOUTME: Measures aggregation, goal evaluation, insight rules, dashboard building and session logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

//! Criterion benchmarks for nutrition recomputation.
//!
//! Every log event recomputes the whole day, so these measure how the
//! pipeline scales with the number of entries in a day.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::cast_possible_wrap,
    missing_docs
)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrition_tracker::catalog::FoodCatalog;
use nutrition_tracker::config::TrackerConfig;
use nutrition_tracker::intelligence::{aggregator, goal_evaluator, InsightEngine};
use nutrition_tracker::log_store::LogStore;
use nutrition_tracker::models::{LogEntry, MealSlot, NutritionGoals};
use nutrition_tracker::presentation::DashboardView;
use nutrition_tracker::session::TrackerSession;
use nutrition_tracker::storage::{InMemoryDocumentStore, StoreCapability};
use tokio::runtime::Runtime;

const DAY_SIZES: [usize; 3] = [10, 100, 1_000];

fn bench_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

/// `count` catalog entries spread across the bench day
fn generate_day(count: usize) -> Vec<LogEntry> {
    let catalog = FoodCatalog::builtin();
    let foods: Vec<_> = catalog.iter().collect();
    let start = Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let item = foods[i % foods.len()];
            let at = start + Duration::seconds((i * 86_399 / count.max(1)) as i64);
            let slot = MealSlot::ALL[i % MealSlot::ALL.len()];
            LogEntry::from_food_item(item, 0.5 + (i % 4) as f64 * 0.5, slot, &at).unwrap()
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for size in DAY_SIZES {
        let entries = generate_day(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| aggregator::daily_totals(black_box(bench_day()), black_box(entries)));
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let entries = generate_day(100);
    let totals = aggregator::totals(&entries);
    let goals = NutritionGoals::default();
    let engine = InsightEngine::new();

    let mut group = c.benchmark_group("evaluate");
    group.bench_function("goal_progress", |b| {
        b.iter(|| goal_evaluator::progress(black_box(&totals), black_box(&goals)));
    });
    group.bench_function("insight_rules", |b| {
        b.iter(|| engine.evaluate(black_box(&totals), black_box(&goals), black_box(20)));
    });
    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let store = LogStore::from_entries(generate_day(100)).unwrap();
    let goals = NutritionGoals::default();
    let day = bench_day();
    let totals = store.daily_totals(day);
    let insights = InsightEngine::new().evaluate(&totals.nutrients, &goals, 12);

    c.bench_function("dashboard_build", |b| {
        b.iter(|| {
            DashboardView::build(
                day,
                store.entries_for_date(day),
                &goals,
                &insights,
                &store.daily_series(day, 7),
            )
        });
    });
}

fn bench_session_log(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let config = TrackerConfig::default();

    c.bench_function("session_log_catalog_food", |b| {
        b.to_async(&rt).iter(|| async {
            let store = StoreCapability::available(InMemoryDocumentStore::new());
            let mut session = TrackerSession::open_at("bench", store, &config, bench_day())
                .await
                .unwrap();
            for hour in 7..20 {
                let at = Utc.with_ymd_and_hms(2025, 3, 14, hour, 0, 0).unwrap();
                black_box(
                    session
                        .log_catalog_food(hour, 1.0, MealSlot::Snack, &at, hour)
                        .await
                        .unwrap(),
                );
            }
            session.close()
        });
    });
}

criterion_group!(
    benches,
    bench_aggregate,
    bench_evaluate,
    bench_dashboard,
    bench_session_log
);
criterion_main!(benches);
