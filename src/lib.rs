// ABOUTME: Main library entry point for the nutrition tracker
// ABOUTME: Food catalog, daily log, tracker sessions, persistence seam and dashboard data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

#![deny(unsafe_code)]

//! # Nutrition Tracker
//!
//! Aggregates a user's food log into daily nutrient totals, compares them
//! with nutrition goals and produces rule-based advisories for a dashboard.
//!
//! ## Architecture
//!
//! - **`nutrition-core`**: models, constants and the unified error type
//! - **`nutrition-intelligence`**: aggregation, goal evaluation and insight rules
//! - **catalog**: built-in food table with keyword search
//! - **`log_store`**: append-only entries grouped by day
//! - **session**: per-user state with validate, persist, append and recompute
//! - **storage**: document store trait and availability capability
//! - **presentation**: progress bars, insight cards and chart series
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::{Local, Timelike};
//! use nutrition_tracker::config::TrackerConfig;
//! use nutrition_tracker::errors::AppResult;
//! use nutrition_tracker::models::MealSlot;
//! use nutrition_tracker::session::TrackerSession;
//! use nutrition_tracker::storage::{InMemoryDocumentStore, StoreCapability};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = TrackerConfig::from_env()?;
//!     let store = StoreCapability::available(InMemoryDocumentStore::new());
//!     let mut session = TrackerSession::open("user-1", store, &config).await?;
//!
//!     let now = Local::now();
//!     let snapshot = session
//!         .log_catalog_food(5, 1.5, MealSlot::Lunch, &now, now.hour())
//!         .await?;
//!     println!("{} kcal today", snapshot.totals.nutrients.calories);
//!
//!     let summary = session.close();
//!     println!("logged {} entries", summary.entries_logged);
//!     Ok(())
//! }
//! ```

/// Built-in food catalog and search
pub mod catalog;

/// Configuration loaded from the environment
pub mod config;

/// Append-only daily log
pub mod log_store;

/// Structured logging setup
pub mod logging;

/// Dashboard view models
pub mod presentation;

/// Per-user tracker session
pub mod session;

/// Document store abstraction
pub mod storage;

pub use nutrition_core::{constants, errors, models};
pub use nutrition_intelligence as intelligence;
