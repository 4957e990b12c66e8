// ABOUTME: Document store abstraction for persisting log entries and goals per user
// ABOUTME: Pluggable async backends plus an explicit availability capability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

//! Persistence seam for the tracker
//!
//! The tracker never talks to a storage backend directly. A session receives
//! a [`StoreCapability`] that either carries a [`DocumentStore`] or explains
//! why none is available, and branches on it explicitly.

/// In-memory document store
pub mod memory;

pub use memory::InMemoryDocumentStore;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use nutrition_core::errors::AppResult;
use nutrition_core::models::{LogEntry, NutritionGoals};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Document store for per-user log entries and goals
///
/// Entries are keyed by user and calendar day; goals by user. Backends
/// report failures as `ExternalServiceError`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name used in logs
    fn backend_name(&self) -> &'static str;

    /// Entries logged by `user_id` on `date`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn load_entries(&self, user_id: &str, date: NaiveDate) -> AppResult<Vec<LogEntry>>;

    /// Append one entry to the user's document for the entry's date
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write
    async fn save_entry(&self, user_id: &str, entry: &LogEntry) -> AppResult<()>;

    /// Saved goals, `None` when the user never saved any
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn load_goals(&self, user_id: &str) -> AppResult<Option<NutritionGoals>>;

    /// Replace the user's goals
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write
    async fn save_goals(&self, user_id: &str, goals: &NutritionGoals) -> AppResult<()>;

    /// Entries for every day from `start` through `end`, in date order
    ///
    /// # Errors
    ///
    /// Returns the first backend error encountered
    async fn load_entries_between(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<LogEntry>> {
        let mut entries = Vec::new();
        let mut day = start;
        while day <= end {
            entries.extend(self.load_entries(user_id, day).await?);
            match day.checked_add_days(Days::new(1)) {
                Some(next) => day = next,
                None => break,
            }
        }
        Ok(entries)
    }
}

/// Whether a document store can be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    /// Entries and goals are persisted
    Available,
    /// The session keeps everything in memory only
    Unavailable,
}

/// Document store handed to a session, or the reason there is none
#[derive(Clone)]
pub enum StoreCapability {
    /// A usable store
    Available(Arc<dyn DocumentStore>),
    /// No store; the session runs in memory only
    Unavailable {
        /// Why the store cannot be used
        reason: String,
    },
}

impl StoreCapability {
    /// Wrap a concrete store
    #[must_use]
    pub fn available(store: impl DocumentStore + 'static) -> Self {
        Self::Available(Arc::new(store))
    }

    /// No store, with the reason shown in logs
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Current status
    #[must_use]
    pub const fn status(&self) -> StoreStatus {
        match self {
            Self::Available(_) => StoreStatus::Available,
            Self::Unavailable { .. } => StoreStatus::Unavailable,
        }
    }

    /// The store, when available
    #[must_use]
    pub fn store(&self) -> Option<&Arc<dyn DocumentStore>> {
        match self {
            Self::Available(store) => Some(store),
            Self::Unavailable { .. } => None,
        }
    }
}

impl fmt::Debug for StoreCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(store) => f
                .debug_tuple("Available")
                .field(&store.backend_name())
                .finish(),
            Self::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}
