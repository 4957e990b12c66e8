// ABOUTME: Nutrition intelligence engine: aggregation, goal evaluation and insights
// ABOUTME: Pure functions over nutrition-core models, recomputed on every log event
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

#![deny(unsafe_code)]

//! # Nutrition Intelligence
//!
//! Turns a day's log entries into totals, goal progress and advisories:
//!
//! - **aggregator**: order-independent nutrient totals per day, per meal slot and per day range
//! - **`goal_evaluator`**: clamped percent-of-goal and on-track/near/behind status
//! - **insights**: ordered threshold rules producing warnings and informational notes
//! - **config**: rule thresholds with validation and environment overrides
//!
//! Nothing here performs I/O or keeps state between calls.

/// Nutrient totals over log entries
pub mod aggregator;

/// Insight rule configuration
pub mod config;

/// Percent-of-goal and status classification
pub mod goal_evaluator;

/// Rule-based insight generation
pub mod insights;

pub use config::{ConfigError, InsightRulesConfig};
pub use goal_evaluator::{GoalStatus, NutrientProgress};
pub use insights::{Insight, InsightEngine, InsightKind, InsightSeverity};
