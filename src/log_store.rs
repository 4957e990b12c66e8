// ABOUTME: Append-only in-memory log of food entries partitioned by calendar day
// ABOUTME: Validates entries on append and exposes per-day slices for aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

//! Daily log store
//!
//! Entries are grouped by the day they count toward and kept in insertion
//! order within a day. Entries are never edited or removed.

use chrono::{Days, NaiveDate};
use nutrition_core::errors::AppResult;
use nutrition_core::models::{DailyTotals, LogEntry};
use nutrition_intelligence::aggregator;
use std::collections::BTreeMap;
use tracing::debug;

/// Log entries keyed by day
#[derive(Debug, Clone, Default)]
pub struct LogStore {
    by_date: BTreeMap<NaiveDate, Vec<LogEntry>>,
    len: usize,
}

impl LogStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing entries
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for the first entry that fails validation
    pub fn from_entries(entries: impl IntoIterator<Item = LogEntry>) -> AppResult<Self> {
        let mut store = Self::new();
        for entry in entries {
            store.append(entry)?;
        }
        Ok(store)
    }

    /// Add an entry to the end of its day
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if servings are not positive or any nutrient
    /// amount is negative; the store is left unchanged
    pub fn append(&mut self, entry: LogEntry) -> AppResult<()> {
        entry.validate()?;
        debug!(
            date = %entry.date,
            food = %entry.food_name,
            calories = entry.nutrients.calories,
            "Appending log entry"
        );
        self.by_date.entry(entry.date).or_default().push(entry);
        self.len += 1;
        Ok(())
    }

    /// Entries for `date` in insertion order, empty when nothing was logged
    #[must_use]
    pub fn entries_for_date(&self, date: NaiveDate) -> &[LogEntry] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Days with at least one entry, ascending
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }

    /// Every entry, ordered by day then insertion
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.by_date.values().flatten()
    }

    /// Total number of entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no entry was logged
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Totals for `date`
    #[must_use]
    pub fn daily_totals(&self, date: NaiveDate) -> DailyTotals {
        aggregator::daily_totals(date, self.entries_for_date(date))
    }

    /// Daily totals for `days` days ending at `end`, oldest first and zero-filled
    #[must_use]
    pub fn daily_series(&self, end: NaiveDate, days: u32) -> Vec<DailyTotals> {
        let start = end
            .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
            .unwrap_or(NaiveDate::MIN);
        let in_range: Vec<LogEntry> = self
            .by_date
            .range(start..=end)
            .flat_map(|(_, entries)| entries.iter().cloned())
            .collect();
        aggregator::daily_series(&in_range, end, days)
    }
}
