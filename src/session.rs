// ABOUTME: Per-user tracker session owning the day log, goals and insight engine
// ABOUTME: Validate, persist, append and recompute flow with one-shot async loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

//! Tracker session
//!
//! A [`TrackerSession`] is the explicit state object for one user: it is
//! opened once, receives log events through `&mut self` and is closed to
//! produce a [`SessionSummary`]. Every event recomputes totals, progress and
//! insights from the full entry set for the day; nothing is cached.
//!
//! [`SessionLoader`] wraps opening in a one-shot future so several consumers
//! can await the same session without polling.

use crate::catalog::FoodCatalog;
use crate::config::TrackerConfig;
use crate::log_store::LogStore;
use crate::presentation::DashboardView;
use crate::storage::{StoreCapability, StoreStatus};
use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};
use nutrition_core::constants::service_names::DOCUMENT_STORE;
use nutrition_core::errors::{AppError, AppResult, ErrorCode};
use nutrition_core::models::{DailyTotals, FoodItem, LogEntry, MealSlot, NutritionGoals};
use nutrition_intelligence::goal_evaluator::{self, NutrientProgress};
use nutrition_intelligence::{Insight, InsightEngine};
use serde::Serialize;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, info, warn};

/// Totals, progress and insights for one day, recomputed after every event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySnapshot {
    /// Summed nutrients
    pub totals: DailyTotals,
    /// Progress for every nutrient in display order
    pub progress: Vec<NutrientProgress>,
    /// Insights in rule order, possibly empty
    pub insights: Vec<Insight>,
}

/// What happened during a session, returned on close
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// User the session belonged to
    pub user_id: String,
    /// Entries loaded from the store when the session opened
    pub entries_loaded: usize,
    /// Entries logged while the session was open
    pub entries_logged: usize,
    /// Whether goals were changed
    pub goals_updated: bool,
    /// Store availability for the whole session
    pub store_status: StoreStatus,
    /// When the session was opened
    pub opened_at: DateTime<Utc>,
    /// When the session was closed
    pub closed_at: DateTime<Utc>,
}

/// Live nutrition state for one user
#[derive(Debug)]
pub struct TrackerSession {
    user_id: String,
    catalog: FoodCatalog,
    log: LogStore,
    goals: NutritionGoals,
    engine: InsightEngine,
    capability: StoreCapability,
    trend_days: u32,
    opened_at: DateTime<Utc>,
    entries_loaded: usize,
    entries_logged: usize,
    goals_updated: bool,
}

impl TrackerSession {
    /// Open a session for today in the local time zone
    ///
    /// # Errors
    ///
    /// See [`TrackerSession::open_at`]
    pub async fn open(
        user_id: &str,
        capability: StoreCapability,
        config: &TrackerConfig,
    ) -> AppResult<Self> {
        Self::open_at(user_id, capability, config, Local::now().date_naive()).await
    }

    /// Open a session, loading goals and the trend window ending at `today`
    ///
    /// Without a store the session starts empty with the configured default
    /// goals. Stored entries that fail validation are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty user id and
    /// `ExternalServiceError` if an available store fails to load
    pub async fn open_at(
        user_id: &str,
        capability: StoreCapability,
        config: &TrackerConfig,
        today: NaiveDate,
    ) -> AppResult<Self> {
        if user_id.trim().is_empty() {
            return Err(AppError::invalid_input("User id cannot be empty"));
        }

        let mut log = LogStore::new();
        let mut goals = config.default_goals;

        match &capability {
            StoreCapability::Available(store) => {
                if let Some(saved) = store
                    .load_goals(user_id)
                    .await
                    .map_err(|e| store_failure(e, user_id))?
                {
                    goals = saved;
                }

                let start = today
                    .checked_sub_days(Days::new(u64::from(config.trend_days.saturating_sub(1))))
                    .unwrap_or(today);
                let stored = store
                    .load_entries_between(user_id, start, today)
                    .await
                    .map_err(|e| store_failure(e, user_id))?;

                for entry in stored {
                    let food = entry.food_name.clone();
                    if let Err(e) = log.append(entry) {
                        warn!(user_id = %user_id, food = %food, error = %e, "Skipping invalid stored entry");
                    }
                }
            }
            StoreCapability::Unavailable { reason } => {
                warn!(
                    user_id = %user_id,
                    reason = %reason,
                    "Document store unavailable, session will not persist"
                );
            }
        }

        let entries_loaded = log.len();
        info!(
            user_id = %user_id,
            entries_loaded,
            store = ?capability.status(),
            "Tracker session opened"
        );

        Ok(Self {
            user_id: user_id.to_owned(),
            catalog: FoodCatalog::builtin(),
            log,
            goals,
            engine: InsightEngine::with_config(config.insight_rules),
            capability,
            trend_days: config.trend_days,
            opened_at: Utc::now(),
            entries_loaded,
            entries_logged: 0,
            goals_updated: false,
        })
    }

    /// Record an entry and return the recomputed snapshot for its day
    ///
    /// The entry is validated, persisted (when a store is available) and only
    /// then appended; on any failure the session is unchanged. Evening rules
    /// are evaluated at `current_hour`, the caller's local hour, not at the
    /// entry's timestamp.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid entry and `ExternalServiceError`
    /// if persisting fails
    pub async fn log_food(
        &mut self,
        entry: LogEntry,
        current_hour: u32,
    ) -> AppResult<DailySnapshot> {
        entry
            .validate()
            .map_err(|e| e.with_user_id(self.user_id.clone()))?;

        if let Some(store) = self.capability.store() {
            store
                .save_entry(&self.user_id, &entry)
                .await
                .map_err(|e| store_failure(e, &self.user_id))?;
        }

        let date = entry.date;
        info!(
            user_id = %self.user_id,
            food = %entry.food_name,
            meal = %entry.meal_slot,
            calories = entry.nutrients.calories,
            "Food logged"
        );
        self.log.append(entry)?;
        self.entries_logged += 1;

        Ok(self.snapshot(date, current_hour))
    }

    /// Log `servings` of a catalog item at `logged_at`
    ///
    /// The entry counts toward the calendar day of `logged_at` in its own
    /// time zone.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, otherwise as
    /// [`TrackerSession::log_food`]
    pub async fn log_catalog_food<Tz>(
        &mut self,
        food_id: u32,
        servings: f64,
        meal_slot: MealSlot,
        logged_at: &DateTime<Tz>,
        current_hour: u32,
    ) -> AppResult<DailySnapshot>
    where
        Tz: TimeZone,
        Tz::Offset: Sync,
    {
        let item = self
            .catalog
            .get(food_id)
            .ok_or_else(|| AppError::not_found(format!("Food item {food_id}")))?;
        let entry = LogEntry::from_food_item(item, servings, meal_slot, logged_at)?;
        self.log_food(entry, current_hour).await
    }

    /// Replace the user's goals
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative or non-finite targets and
    /// `ExternalServiceError` if persisting fails
    pub async fn update_goals(&mut self, goals: NutritionGoals) -> AppResult<()> {
        goals.validate()?;
        if let Some(store) = self.capability.store() {
            store
                .save_goals(&self.user_id, &goals)
                .await
                .map_err(|e| store_failure(e, &self.user_id))?;
        }
        self.goals = goals;
        self.goals_updated = true;
        info!(user_id = %self.user_id, calories = goals.calories, "Goals updated");
        Ok(())
    }

    /// Totals, progress and insights for `date` as of `current_hour`
    #[must_use]
    pub fn snapshot(&self, date: NaiveDate, current_hour: u32) -> DailySnapshot {
        let totals = self.log.daily_totals(date);
        let progress = goal_evaluator::progress(&totals.nutrients, &self.goals);
        let insights = self
            .engine
            .evaluate(&totals.nutrients, &self.goals, current_hour);
        debug!(
            user_id = %self.user_id,
            %date,
            insight_count = insights.len(),
            "Recomputed daily snapshot"
        );
        DailySnapshot {
            totals,
            progress,
            insights,
        }
    }

    /// Dashboard view for `date` as of `current_hour`
    #[must_use]
    pub fn dashboard(&self, date: NaiveDate, current_hour: u32) -> DashboardView {
        let snapshot = self.snapshot(date, current_hour);
        let history = self.log.daily_series(date, self.trend_days);
        DashboardView::build(
            date,
            self.log.entries_for_date(date),
            &self.goals,
            &snapshot.insights,
            &history,
        )
    }

    /// Catalog search
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&'static FoodItem> {
        self.catalog.search(query)
    }

    /// Entries for `date` in the order they were logged
    #[must_use]
    pub fn entries_for(&self, date: NaiveDate) -> &[LogEntry] {
        self.log.entries_for_date(date)
    }

    /// Current goals
    #[must_use]
    pub const fn goals(&self) -> &NutritionGoals {
        &self.goals
    }

    /// Session owner
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Store availability
    #[must_use]
    pub const fn store_status(&self) -> StoreStatus {
        self.capability.status()
    }

    /// End the session
    #[must_use]
    pub fn close(self) -> SessionSummary {
        let summary = SessionSummary {
            user_id: self.user_id,
            entries_loaded: self.entries_loaded,
            entries_logged: self.entries_logged,
            goals_updated: self.goals_updated,
            store_status: self.capability.status(),
            opened_at: self.opened_at,
            closed_at: Utc::now(),
        };
        info!(
            user_id = %summary.user_id,
            entries_logged = summary.entries_logged,
            "Tracker session closed"
        );
        summary
    }
}

/// Normalize any store error to an external service failure for `user_id`
fn store_failure(error: AppError, user_id: &str) -> AppError {
    let error = match error.code {
        ErrorCode::ExternalServiceError => error,
        _ => AppError::external_service(DOCUMENT_STORE, error.message.clone()).with_source(error),
    };
    warn!(user_id, error = %error, "Document store operation failed");
    error.with_user_id(user_id)
}

/// One-shot asynchronous session initialization
///
/// The first caller of [`SessionLoader::session`] opens the session; later
/// callers await the same result. A failed open is not cached, so the next
/// caller retries.
#[derive(Debug)]
pub struct SessionLoader {
    user_id: String,
    capability: StoreCapability,
    config: TrackerConfig,
    today: Option<NaiveDate>,
    cell: OnceCell<Mutex<TrackerSession>>,
}

impl SessionLoader {
    /// Loader that opens the session for today in the local time zone
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        capability: StoreCapability,
        config: TrackerConfig,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            capability,
            config,
            today: None,
            cell: OnceCell::new(),
        }
    }

    /// Open the session for `today` instead of the current date
    #[must_use]
    pub fn for_date(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Whether the session has been opened
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.cell.initialized()
    }

    /// The session, opening it on first use
    ///
    /// # Errors
    ///
    /// Returns the error from [`TrackerSession::open_at`]
    pub async fn session(&self) -> AppResult<&Mutex<TrackerSession>> {
        self.cell
            .get_or_try_init(|| async {
                let today = self.today.unwrap_or_else(|| Local::now().date_naive());
                TrackerSession::open_at(
                    &self.user_id,
                    self.capability.clone(),
                    &self.config,
                    today,
                )
                .await
                .map(Mutex::new)
            })
            .await
    }

    /// Close the session if it was opened
    #[must_use]
    pub fn close(self) -> Option<SessionSummary> {
        self.cell
            .into_inner()
            .map(|session| session.into_inner().close())
    }
}
