// ABOUTME: In-memory document store backed by concurrent hash maps
// ABOUTME: Used by the CLI and tests; supports simulating an unreachable backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

use super::DocumentStore;
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use nutrition_core::constants::service_names::DOCUMENT_STORE;
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{LogEntry, NutritionGoals};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Document store that keeps everything in process memory
///
/// Cloning is not supported; share it behind the `Arc` inside
/// `StoreCapability`.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    entries: DashMap<(String, NaiveDate), Vec<LogEntry>>,
    goals: DashMap<String, NutritionGoals>,
    offline: AtomicBool,
}

impl InMemoryDocumentStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail as if the backend were unreachable
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Total number of stored entries across all users and days
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.iter().map(|day| day.value().len()).sum()
    }

    fn ensure_online(&self) -> AppResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::unavailable(DOCUMENT_STORE));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn load_entries(&self, user_id: &str, date: NaiveDate) -> AppResult<Vec<LogEntry>> {
        self.ensure_online()?;
        let entries = self
            .entries
            .get(&(user_id.to_owned(), date))
            .map(|day| day.value().clone())
            .unwrap_or_default();
        debug!(user_id, %date, count = entries.len(), "Loaded entries from memory store");
        Ok(entries)
    }

    async fn save_entry(&self, user_id: &str, entry: &LogEntry) -> AppResult<()> {
        self.ensure_online()?;
        self.entries
            .entry((user_id.to_owned(), entry.date))
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn load_goals(&self, user_id: &str) -> AppResult<Option<NutritionGoals>> {
        self.ensure_online()?;
        Ok(self.goals.get(user_id).map(|goals| *goals.value()))
    }

    async fn save_goals(&self, user_id: &str, goals: &NutritionGoals) -> AppResult<()> {
        self.ensure_online()?;
        self.goals.insert(user_id.to_owned(), *goals);
        Ok(())
    }
}
