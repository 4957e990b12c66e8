// ABOUTME: Rule-based daily nutrition insights comparing totals against goals
// ABOUTME: Calorie deficit/surplus, protein deficit, macro ratio and evening intake rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

//! Insight generation for daily nutrition
//!
//! The engine applies a fixed, ordered list of threshold rules to the day's
//! totals. Rules are independent of each other except for the calorie
//! deficit/surplus pair, which is an if/else-if: between the two thresholds
//! no calorie insight is produced. An empty result is valid; presenting a
//! positive message in that case is up to the caller.

use crate::config::InsightRulesConfig;
use nutrition_core::models::{Nutrients, NutritionGoals};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Latest valid hour of day
const LAST_HOUR: u32 = 23;

/// How urgent an insight is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    /// Something the user should act on
    Warning,
    /// Informational feedback
    Info,
}

/// Rule that produced an insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Calories well below goal
    CalorieDeficit,
    /// Calories well above goal
    CalorieSurplus,
    /// Protein well below goal
    ProteinDeficit,
    /// Protein makes up a large share of macro calories
    HighProtein,
    /// Carbohydrates make up a small share of macro calories
    LowCarb,
    /// Little eaten and the day is nearly over
    EveningLowIntake,
}

/// An advisory derived from the day's totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Rule that fired
    pub kind: InsightKind,
    /// Urgency
    pub severity: InsightSeverity,
    /// What was observed, with the numbers involved
    pub message: String,
    /// What to do about it
    pub recommendation: String,
    /// Supporting values for the insight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Applies the insight rules in order
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    config: InsightRulesConfig,
}

impl InsightEngine {
    /// Engine with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom thresholds
    #[must_use]
    pub const fn with_config(config: InsightRulesConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &InsightRulesConfig {
        &self.config
    }

    /// Evaluate every rule against the day's totals
    ///
    /// `current_hour` is the local hour (0-23); larger values are treated as 23.
    #[must_use]
    pub fn evaluate(
        &self,
        totals: &Nutrients,
        goals: &NutritionGoals,
        current_hour: u32,
    ) -> Vec<Insight> {
        let hour = if current_hour > LAST_HOUR {
            debug!(current_hour, "Hour out of range, treating as end of day");
            LAST_HOUR
        } else {
            current_hour
        };

        let mut insights = Vec::new();
        insights.extend(self.calorie_balance_insight(totals, goals));
        insights.extend(self.protein_insight(totals, goals));
        insights.extend(self.macro_ratio_insights(totals));
        insights.extend(self.evening_insight(totals, goals, hour));

        debug!(
            insight_count = insights.len(),
            hour, "Evaluated nutrition insight rules"
        );
        insights
    }

    fn calorie_balance_insight(
        &self,
        totals: &Nutrients,
        goals: &NutritionGoals,
    ) -> Option<Insight> {
        // No calorie target, nothing to compare against
        if goals.calories <= 0.0 {
            return None;
        }

        if totals.calories < goals.calories * self.config.calorie_deficit_ratio {
            let gap = goals.calories - totals.calories;
            Some(Insight {
                kind: InsightKind::CalorieDeficit,
                severity: InsightSeverity::Warning,
                message: format!("You're {gap:.0} calories below your daily goal."),
                recommendation: "Add a balanced snack such as Greek yogurt with fruit, \
                                 a handful of nuts or whole-grain toast with peanut butter."
                    .to_owned(),
                data: Some(serde_json::json!({
                    "calories": totals.calories,
                    "goal": goals.calories,
                    "gap": gap,
                })),
            })
        } else if totals.calories > goals.calories * self.config.calorie_surplus_ratio {
            let excess = totals.calories - goals.calories;
            Some(Insight {
                kind: InsightKind::CalorieSurplus,
                severity: InsightSeverity::Info,
                message: format!("You're {excess:.0} calories over your daily goal."),
                recommendation: "Keep the remaining meals light or add some physical \
                                 activity like a brisk walk."
                    .to_owned(),
                data: Some(serde_json::json!({
                    "calories": totals.calories,
                    "goal": goals.calories,
                    "excess": excess,
                })),
            })
        } else {
            None
        }
    }

    fn protein_insight(&self, totals: &Nutrients, goals: &NutritionGoals) -> Option<Insight> {
        if totals.protein >= goals.protein * self.config.protein_deficit_ratio {
            return None;
        }

        let gap = goals.protein - totals.protein;
        Some(Insight {
            kind: InsightKind::ProteinDeficit,
            severity: InsightSeverity::Warning,
            message: format!("You need {gap:.0}g more protein to reach your goal."),
            recommendation: "Include protein-dense foods like chicken breast, fish, eggs, \
                             lentils or cottage cheese in your next meal."
                .to_owned(),
            data: Some(serde_json::json!({
                "protein_g": totals.protein,
                "goal_g": goals.protein,
                "gap_g": gap,
            })),
        })
    }

    fn macro_ratio_insights(&self, totals: &Nutrients) -> Vec<Insight> {
        let macros = totals.macro_calories();
        // No macro calories logged yet
        let Some((protein_share, carb_share)) = macros.ratios() else {
            return Vec::new();
        };

        let mut insights = Vec::new();

        if protein_share > self.config.high_protein_share {
            insights.push(Insight {
                kind: InsightKind::HighProtein,
                severity: InsightSeverity::Info,
                message: format!(
                    "Great job on protein! {:.0}% of your macro calories come from protein.",
                    protein_share * 100.0
                ),
                recommendation: "Keep pairing protein with vegetables and whole grains to \
                                 round out your meals."
                    .to_owned(),
                data: Some(serde_json::json!({
                    "protein_share": protein_share,
                    "macro_calories": macros.total(),
                })),
            });
        }

        if carb_share < self.config.low_carb_share {
            insights.push(Insight {
                kind: InsightKind::LowCarb,
                severity: InsightSeverity::Info,
                message: format!(
                    "You're eating low-carb today: {:.0}% of your macro calories come from carbs.",
                    carb_share * 100.0
                ),
                recommendation: "If you're training, add complex carbs like oats, rice or \
                                 sweet potatoes to fuel your workouts."
                    .to_owned(),
                data: Some(serde_json::json!({
                    "carb_share": carb_share,
                    "macro_calories": macros.total(),
                })),
            });
        }

        insights
    }

    fn evening_insight(
        &self,
        totals: &Nutrients,
        goals: &NutritionGoals,
        hour: u32,
    ) -> Option<Insight> {
        if hour <= self.config.evening_after_hour
            || totals.calories >= goals.calories * self.config.evening_low_intake_ratio
        {
            return None;
        }

        Some(Insight {
            kind: InsightKind::EveningLowIntake,
            severity: InsightSeverity::Warning,
            message: format!(
                "It's evening and you've eaten {:.0} of your {:.0} calorie goal.",
                totals.calories, goals.calories
            ),
            recommendation: "Have a balanced dinner with lean protein, vegetables and \
                             whole grains so you don't go to bed under-fueled."
                .to_owned(),
            data: Some(serde_json::json!({
                "calories": totals.calories,
                "goal": goals.calories,
                "hour": hour,
            })),
        })
    }
}
