// ABOUTME: Goal attainment evaluation for daily nutrient totals
// ABOUTME: Clamped percent-of-goal per nutrient and on-track/near/behind classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

use nutrition_core::constants::goal_status::{MAX_PERCENT, NEAR_MIN_PERCENT, ON_TRACK_MIN_PERCENT};
use nutrition_core::models::{Nutrient, Nutrients, NutritionGoals};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coarse progress classification used for color-coding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    /// At least 90% of goal
    OnTrack,
    /// 70% up to 90% of goal
    Near,
    /// Below 70% of goal
    Behind,
}

impl GoalStatus {
    /// Classify a percent-of-goal value
    #[must_use]
    pub const fn classify(percent: u32) -> Self {
        if percent >= ON_TRACK_MIN_PERCENT {
            Self::OnTrack
        } else if percent >= NEAR_MIN_PERCENT {
            Self::Near
        } else {
            Self::Behind
        }
    }

    /// Stable kebab-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnTrack => "on-track",
            Self::Near => "near",
            Self::Behind => "behind",
        }
    }
}

/// Progress of one nutrient toward its goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientProgress {
    /// Nutrient measured
    pub nutrient: Nutrient,
    /// Amount consumed today
    pub consumed: f64,
    /// Daily target
    pub goal: f64,
    /// Rounded percent of goal, clamped to 100
    pub percent: u32,
    /// Classification of `percent`
    pub status: GoalStatus,
}

/// `min(100, round(100 x total / goal))`; a zero or negative goal means "no target" and yields 0
///
/// A total that overflowed to infinity still clamps to 100; only NaN yields 0.
#[must_use]
pub fn percent_of_goal(total: f64, goal: f64) -> u32 {
    if goal <= 0.0 || !goal.is_finite() || total.is_nan() {
        return 0;
    }
    let percent = (100.0 * total / goal).round();
    percent.clamp(0.0, f64::from(MAX_PERCENT)) as u32
}

/// Percent of goal for every nutrient
#[must_use]
pub fn percentages(totals: &Nutrients, goals: &NutritionGoals) -> BTreeMap<Nutrient, u32> {
    Nutrient::ALL
        .iter()
        .map(|&n| (n, percent_of_goal(totals.get(n), goals.get(n))))
        .collect()
}

/// Progress rows for every nutrient in display order
#[must_use]
pub fn progress(totals: &Nutrients, goals: &NutritionGoals) -> Vec<NutrientProgress> {
    Nutrient::ALL
        .iter()
        .map(|&nutrient| {
            let consumed = totals.get(nutrient);
            let goal = goals.get(nutrient);
            let percent = percent_of_goal(consumed, goal);
            NutrientProgress {
                nutrient,
                consumed,
                goal,
                percent,
                status: GoalStatus::classify(percent),
            }
        })
        .collect()
}
