// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging setup, timestamps, entries and scenario goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrition_tracker`

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use nutrition_tracker::models::{LogEntry, MealSlot, Nutrients, NutritionGoals};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed test day
pub fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

/// Instant on the test day at `hour`:00 UTC
pub fn at_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, hour, 0, 0).unwrap()
}

/// One-serving custom entry on the test day
pub fn entry(name: &str, nutrients: Nutrients, slot: MealSlot, hour: u32) -> LogEntry {
    LogEntry::custom(name, nutrients, 1.0, slot, &at_hour(hour)).unwrap()
}

/// Entries summing to 1500 kcal, 80 g protein, 150 g carbs, 50 g fat
pub fn scenario_entries() -> Vec<LogEntry> {
    vec![
        entry(
            "Oatmeal with berries",
            Nutrients::new(400.0, 15.0, 60.0, 10.0, 8.0, 12.0),
            MealSlot::Breakfast,
            8,
        ),
        entry(
            "Chicken wrap",
            Nutrients::new(650.0, 40.0, 55.0, 25.0, 5.0, 4.0),
            MealSlot::Lunch,
            12,
        ),
        entry(
            "Trail mix",
            Nutrients::new(450.0, 25.0, 35.0, 15.0, 4.0, 10.0),
            MealSlot::Snack,
            15,
        ),
    ]
}

/// Goals of 2000 kcal, 150 g protein, 225 g carbs, 67 g fat
pub fn scenario_goals() -> NutritionGoals {
    NutritionGoals {
        calories: 2000.0,
        protein: 150.0,
        carbs: 225.0,
        fat: 67.0,
        ..NutritionGoals::default()
    }
}

/// Nutrients with only calories and the three macros set
pub fn macros(calories: f64, protein: f64, carbs: f64, fat: f64) -> Nutrients {
    Nutrients::new(calories, protein, carbs, fat, 0.0, 0.0)
}
