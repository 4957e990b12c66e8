// ABOUTME: Integration tests for tracker sessions and the one-shot session loader
// ABOUTME: Log flow, persistence failures, goal updates, store capability and teardown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{FixedOffset, NaiveDate, TimeZone};
use nutrition_tracker::config::TrackerConfig;
use nutrition_tracker::errors::{AppError, ErrorCode};
use nutrition_tracker::intelligence::InsightKind;
use nutrition_tracker::models::{MealSlot, NutritionGoals};
use nutrition_tracker::session::{SessionLoader, TrackerSession};
use nutrition_tracker::storage::{
    DocumentStore, InMemoryDocumentStore, StoreCapability, StoreStatus,
};
use std::sync::Arc;

async fn open_with(store: Arc<InMemoryDocumentStore>) -> TrackerSession {
    common::init_test_logging();
    TrackerSession::open_at(
        "user-1",
        StoreCapability::Available(store),
        &TrackerConfig::default(),
        common::test_day(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_log_food_recomputes_snapshot() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let mut session = open_with(store.clone()).await;
    session.update_goals(common::scenario_goals()).await.unwrap();

    let mut last = None;
    for entry in common::scenario_entries() {
        last = Some(session.log_food(entry, 15).await.unwrap());
    }
    let snapshot = last.unwrap();

    assert_eq!(snapshot.totals.entry_count, 3);
    assert!((snapshot.totals.nutrients.calories - 1500.0).abs() < 1e-9);
    assert_eq!(snapshot.progress[0].percent, 75);
    let found: Vec<InsightKind> = snapshot.insights.iter().map(|i| i.kind).collect();
    assert_eq!(found, [InsightKind::CalorieDeficit, InsightKind::ProteinDeficit]);

    assert_eq!(store.entry_count(), 3);
}

#[tokio::test]
async fn test_invalid_entry_is_rejected_without_side_effects() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let mut session = open_with(store.clone()).await;

    let mut entry = common::scenario_entries().remove(0);
    entry.nutrients.protein = -5.0;

    let err = session.log_food(entry, 9).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(session.entries_for(common::test_day()).is_empty());
    assert_eq!(store.entry_count(), 0);
}

#[tokio::test]
async fn test_persistence_failure_leaves_session_unchanged() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let mut session = open_with(store.clone()).await;
    store.set_offline(true);

    let err = session
        .log_food(common::scenario_entries().remove(0), 9)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(err.context.user_id.as_deref(), Some("user-1"));
    let cause = err
        .source
        .as_deref()
        .and_then(|source| source.downcast_ref::<AppError>())
        .unwrap();
    assert_eq!(cause.code, ErrorCode::ExternalServiceUnavailable);
    assert!(session.entries_for(common::test_day()).is_empty());

    let goals_err = session.update_goals(common::scenario_goals()).await.unwrap_err();
    assert_eq!(goals_err.code, ErrorCode::ExternalServiceError);
    assert_eq!(session.goals(), &NutritionGoals::default());
}

#[tokio::test]
async fn test_back_logged_entry_uses_current_hour_for_evening_rule() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let mut session = open_with(store).await;

    // Breakfast recorded late in the evening
    let breakfast = common::entry(
        "Toast and jam",
        common::macros(300.0, 8.0, 50.0, 7.0),
        MealSlot::Breakfast,
        8,
    );
    let logged = session.log_food(breakfast, 21).await.unwrap();

    let found: Vec<InsightKind> = logged.insights.iter().map(|i| i.kind).collect();
    assert!(found.contains(&InsightKind::EveningLowIntake));
    assert_eq!(logged, session.snapshot(common::test_day(), 21));
}

#[tokio::test]
async fn test_entries_count_toward_the_local_calendar_day() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let mut session = open_with(store.clone()).await;

    // 21:00 at UTC-5 on the test day is already the next day in UTC
    let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
    let dinner = eastern.with_ymd_and_hms(2025, 3, 14, 21, 0, 0).unwrap();
    let snapshot = session
        .log_catalog_food(5, 1.0, MealSlot::Dinner, &dinner, 21)
        .await
        .unwrap();

    assert_eq!(snapshot.totals.date, common::test_day());
    assert_eq!(session.entries_for(common::test_day()).len(), 1);
    let next_day = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
    assert!(session.entries_for(next_day).is_empty());
    assert_eq!(
        store
            .load_entries("user-1", common::test_day())
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_catalog_logging_scales_servings() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let mut session = open_with(store).await;

    let snapshot = session
        .log_catalog_food(5, 2.0, MealSlot::Dinner, &common::at_hour(19), 19)
        .await
        .unwrap();
    assert!((snapshot.totals.nutrients.calories - 330.0).abs() < 1e-9);
    assert!((snapshot.totals.nutrients.protein - 62.0).abs() < 1e-9);

    let err = session
        .log_catalog_food(9999, 1.0, MealSlot::Snack, &common::at_hour(19), 19)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = session
        .log_catalog_food(5, 0.0, MealSlot::Snack, &common::at_hour(19), 19)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_reopening_restores_entries_and_goals() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let mut session = open_with(store.clone()).await;
    session.update_goals(common::scenario_goals()).await.unwrap();
    for entry in common::scenario_entries() {
        session.log_food(entry, 16).await.unwrap();
    }
    let summary = session.close();
    assert_eq!(summary.entries_logged, 3);
    assert!(summary.goals_updated);

    let reopened = open_with(store).await;
    assert_eq!(reopened.goals(), &common::scenario_goals());
    assert_eq!(reopened.entries_for(common::test_day()).len(), 3);
    assert_eq!(reopened.close().entries_loaded, 3);
}

#[tokio::test]
async fn test_unavailable_store_runs_in_memory() {
    common::init_test_logging();
    let mut session = TrackerSession::open_at(
        "user-2",
        StoreCapability::unavailable("offline mode"),
        &TrackerConfig::default(),
        common::test_day(),
    )
    .await
    .unwrap();

    assert_eq!(session.store_status(), StoreStatus::Unavailable);
    session
        .log_food(common::scenario_entries().remove(0), 9)
        .await
        .unwrap();
    assert_eq!(session.entries_for(common::test_day()).len(), 1);
    assert_eq!(session.close().store_status, StoreStatus::Unavailable);
}

#[tokio::test]
async fn test_open_rejects_empty_user_and_failing_store() {
    let err = TrackerSession::open_at(
        "  ",
        StoreCapability::unavailable("none"),
        &TrackerConfig::default(),
        common::test_day(),
    )
    .await
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let store = Arc::new(InMemoryDocumentStore::new());
    store.set_offline(true);
    let err = TrackerSession::open_at(
        "user-3",
        StoreCapability::Available(store),
        &TrackerConfig::default(),
        common::test_day(),
    )
    .await
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_loader_initializes_once_and_retries_after_failure() {
    common::init_test_logging();
    let store = Arc::new(InMemoryDocumentStore::new());
    store
        .save_entry("user-4", &common::scenario_entries().remove(0))
        .await
        .unwrap();
    store.set_offline(true);

    let loader = SessionLoader::new(
        "user-4",
        StoreCapability::Available(store.clone()),
        TrackerConfig::default(),
    )
    .for_date(common::test_day());

    assert!(loader.session().await.is_err());
    assert!(!loader.is_ready());

    store.set_offline(false);
    let first = loader.session().await.unwrap();
    let second = loader.session().await.unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(loader.is_ready());

    first
        .lock()
        .await
        .log_food(common::scenario_entries().remove(1), 13)
        .await
        .unwrap();

    let summary = loader.close().unwrap();
    assert_eq!(summary.entries_loaded, 1);
    assert_eq!(summary.entries_logged, 1);
}

#[tokio::test]
async fn test_dashboard_includes_trend_window() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let mut session = open_with(store).await;
    for entry in common::scenario_entries() {
        session.log_food(entry, 16).await.unwrap();
    }

    let view = session.dashboard(common::test_day(), 12);
    assert_eq!(view.trend_chart.labels.len(), 7);
    assert_eq!(view.progress_bars.len(), 6);
    assert!((view.trend_chart.datasets[0].values[6] - 1500.0).abs() < 1e-9);
}
