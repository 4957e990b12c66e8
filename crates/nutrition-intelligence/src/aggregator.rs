// ABOUTME: Daily nutrition aggregation over log entries
// ABOUTME: Order-independent totals, per-day totals, meal-slot breakdown and day series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

//! Nutrition Aggregator
//!
//! Reduces log entries into nutrient totals. Totals are a pure function of
//! the entry set: they are never cached and never depend on entry order.

use chrono::{Days, NaiveDate};
use nutrition_core::models::{DailyTotals, LogEntry, MealSlot, Nutrient, Nutrients};
use tracing::debug;

/// Sum every nutrient across `entries`
///
/// Each field is summed independently in ascending value order, so any
/// permutation of the same entries yields bit-identical totals.
#[must_use]
pub fn totals<'a, I>(entries: I) -> Nutrients
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut columns: [Vec<f64>; 6] = Default::default();
    for entry in entries {
        for (column, nutrient) in columns.iter_mut().zip(Nutrient::ALL) {
            column.push(entry.nutrients.get(nutrient));
        }
    }

    let [calories, protein, carbs, fat, fiber, sugar] = columns.map(sorted_sum);
    Nutrients::new(calories, protein, carbs, fat, fiber, sugar)
}

fn sorted_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}

/// Totals for the entries of `entries` that count toward `date`
#[must_use]
pub fn daily_totals(date: NaiveDate, entries: &[LogEntry]) -> DailyTotals {
    let for_day: Vec<&LogEntry> = entries.iter().filter(|e| e.date == date).collect();
    let nutrients = totals(for_day.iter().copied());

    debug!(
        %date,
        entry_count = for_day.len(),
        calories = nutrients.calories,
        "Aggregated daily totals"
    );

    DailyTotals {
        date,
        nutrients,
        entry_count: for_day.len(),
    }
}

/// Totals per meal slot, one row for every slot in chronological order
#[must_use]
pub fn totals_by_meal_slot(entries: &[LogEntry]) -> Vec<(MealSlot, Nutrients)> {
    MealSlot::ALL
        .iter()
        .map(|&slot| {
            let slot_totals = totals(entries.iter().filter(|e| e.meal_slot == slot));
            (slot, slot_totals)
        })
        .collect()
}

/// Daily totals for `days` consecutive days ending at `end` (inclusive)
///
/// Days without entries are present with zero totals, oldest first.
#[must_use]
pub fn daily_series(entries: &[LogEntry], end: NaiveDate, days: u32) -> Vec<DailyTotals> {
    let span = u64::from(days.saturating_sub(1));
    let Some(start) = end.checked_sub_days(Days::new(span)) else {
        return Vec::new();
    };

    start
        .iter_days()
        .take(days as usize)
        .map(|date| daily_totals(date, entries))
        .collect()
}
