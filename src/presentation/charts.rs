// ABOUTME: Chart series builders for the nutrition dashboard
// ABOUTME: Macro calorie split, calories per meal slot and daily calorie trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

use nutrition_core::models::{DailyTotals, LogEntry, Nutrients};
use nutrition_intelligence::aggregator;
use serde::{Deserialize, Serialize};

/// Chart rendering hint for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Proportions of a whole
    Doughnut,
    /// One bar per category
    Bar,
    /// Values over time
    Line,
}

/// One named run of values aligned with the chart labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Legend label
    pub label: String,
    /// One value per chart label
    pub values: Vec<f64>,
}

/// Chart data ready for a charting widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Rendering hint
    pub kind: ChartKind,
    /// Chart heading
    pub title: String,
    /// Category or axis labels
    pub labels: Vec<String>,
    /// Value runs, each as long as `labels`
    pub datasets: Vec<Dataset>,
}

/// Calorie equivalents of protein, carbs and fat
#[must_use]
pub fn macro_chart(totals: &Nutrients) -> ChartSeries {
    let macros = totals.macro_calories();
    ChartSeries {
        kind: ChartKind::Doughnut,
        title: "Macro calories".into(),
        labels: vec!["Protein".into(), "Carbs".into(), "Fat".into()],
        datasets: vec![Dataset {
            label: "kcal".into(),
            values: vec![macros.protein, macros.carbs, macros.fat],
        }],
    }
}

/// Calories per meal slot for one day's entries
#[must_use]
pub fn meal_chart(entries: &[LogEntry]) -> ChartSeries {
    let rows = aggregator::totals_by_meal_slot(entries);
    ChartSeries {
        kind: ChartKind::Bar,
        title: "Calories by meal".into(),
        labels: rows.iter().map(|(slot, _)| slot.label().to_owned()).collect(),
        datasets: vec![Dataset {
            label: "Calories".into(),
            values: rows.iter().map(|(_, totals)| totals.calories).collect(),
        }],
    }
}

/// Daily calories against the calorie goal
#[must_use]
pub fn trend_chart(history: &[DailyTotals], calorie_goal: f64) -> ChartSeries {
    ChartSeries {
        kind: ChartKind::Line,
        title: format!("Calories, last {} days", history.len()),
        labels: history
            .iter()
            .map(|day| day.date.format("%b %d").to_string())
            .collect(),
        datasets: vec![
            Dataset {
                label: "Calories".into(),
                values: history.iter().map(|day| day.nutrients.calories).collect(),
            },
            Dataset {
                label: "Goal".into(),
                values: vec![calorie_goal; history.len()],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_chart_uses_calorie_equivalents() {
        let chart = macro_chart(&Nutrients::new(0.0, 10.0, 20.0, 5.0, 0.0, 0.0));
        assert_eq!(chart.datasets[0].values, vec![40.0, 80.0, 45.0]);
    }

    #[test]
    fn test_empty_meal_chart_has_all_slots() {
        let chart = meal_chart(&[]);
        assert_eq!(chart.labels, ["Breakfast", "Lunch", "Dinner", "Snack"]);
        assert!(chart.datasets[0].values.iter().all(|v| v.abs() < f64::EPSILON));
    }
}
