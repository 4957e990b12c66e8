// ABOUTME: Core data models for nutrition tracking
// ABOUTME: Re-exports nutrient amounts, catalog items, log entries and goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

/// Nutrition tracking models (entries, goals, totals)
pub mod nutrition;

pub use nutrition::{
    DailyTotals, FoodItem, LogEntry, MacroCalories, MealSlot, Nutrient, Nutrients, NutritionGoals,
};
