// ABOUTME: Dashboard view model combining progress bars, insight cards and charts
// ABOUTME: Plain serializable data for the UI plus a text rendering for terminals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

use super::charts::{self, ChartSeries};
use chrono::NaiveDate;
use nutrition_core::models::{DailyTotals, LogEntry, Nutrient, NutritionGoals};
use nutrition_intelligence::goal_evaluator::{self, GoalStatus, NutrientProgress};
use nutrition_intelligence::{aggregator, Insight, InsightKind, InsightSeverity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One nutrient's progress bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressBar {
    /// Nutrient shown
    pub nutrient: Nutrient,
    /// Display label
    pub label: String,
    /// Unit shown after the amounts
    pub unit: String,
    /// Amount consumed
    pub consumed: f64,
    /// Daily target
    pub goal: f64,
    /// Fill level, 0 to 100
    pub percent: u32,
    /// Color class
    pub status: GoalStatus,
    /// Rounded "consumed / goal unit" caption
    pub display: String,
}

impl From<NutrientProgress> for ProgressBar {
    fn from(progress: NutrientProgress) -> Self {
        let unit = progress.nutrient.unit();
        Self {
            nutrient: progress.nutrient,
            label: progress.nutrient.label().to_owned(),
            unit: unit.to_owned(),
            consumed: progress.consumed,
            goal: progress.goal,
            percent: progress.percent,
            status: progress.status,
            display: format!("{:.0} / {:.0} {unit}", progress.consumed, progress.goal),
        }
    }
}

/// Visual tone of an insight card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightTone {
    /// Needs attention
    Warning,
    /// Neutral information
    Info,
    /// Encouragement when nothing needs attention
    Positive,
}

/// Insight formatted for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightCard {
    /// Visual tone
    pub tone: InsightTone,
    /// Short heading
    pub title: String,
    /// Observation
    pub message: String,
    /// Suggested action
    pub recommendation: String,
}

impl InsightCard {
    /// Card shown when no rule fired
    #[must_use]
    pub fn all_clear() -> Self {
        Self {
            tone: InsightTone::Positive,
            title: "Looking good".into(),
            message: "Your nutrition is well balanced today.".into(),
            recommendation: "Keep logging your meals to stay on track.".into(),
        }
    }
}

impl From<&Insight> for InsightCard {
    fn from(insight: &Insight) -> Self {
        let title = match insight.kind {
            InsightKind::CalorieDeficit => "Calorie deficit",
            InsightKind::CalorieSurplus => "Calorie surplus",
            InsightKind::ProteinDeficit => "Protein gap",
            InsightKind::HighProtein => "High protein",
            InsightKind::LowCarb => "Low carb",
            InsightKind::EveningLowIntake => "Evening check-in",
        };
        Self {
            tone: match insight.severity {
                InsightSeverity::Warning => InsightTone::Warning,
                InsightSeverity::Info => InsightTone::Info,
            },
            title: title.to_owned(),
            message: insight.message.clone(),
            recommendation: insight.recommendation.clone(),
        }
    }
}

/// Everything the dashboard shows for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Day shown
    pub date: NaiveDate,
    /// The day's totals
    pub totals: DailyTotals,
    /// One bar per nutrient in display order
    pub progress_bars: Vec<ProgressBar>,
    /// Insight cards, never empty
    pub insight_cards: Vec<InsightCard>,
    /// Macro calorie split
    pub macro_chart: ChartSeries,
    /// Calories per meal slot
    pub meal_chart: ChartSeries,
    /// Daily calories over the trend window
    pub trend_chart: ChartSeries,
}

impl DashboardView {
    /// Assemble the view for `date`
    ///
    /// `entries` are the day's entries, `insights` the engine output for the
    /// same totals and `history` the trend window ending at `date`.
    #[must_use]
    pub fn build(
        date: NaiveDate,
        entries: &[LogEntry],
        goals: &NutritionGoals,
        insights: &[Insight],
        history: &[DailyTotals],
    ) -> Self {
        let totals = aggregator::daily_totals(date, entries);

        let progress_bars = goal_evaluator::progress(&totals.nutrients, goals)
            .into_iter()
            .map(ProgressBar::from)
            .collect();

        let insight_cards = if insights.is_empty() {
            vec![InsightCard::all_clear()]
        } else {
            insights.iter().map(InsightCard::from).collect()
        };

        Self {
            date,
            totals,
            progress_bars,
            insight_cards,
            macro_chart: charts::macro_chart(&totals.nutrients),
            meal_chart: charts::meal_chart(entries),
            trend_chart: charts::trend_chart(history, goals.calories),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Nutrition for {} ({} entries)",
            self.date, self.totals.entry_count
        )?;
        for bar in &self.progress_bars {
            writeln!(
                f,
                "  {:<9} {:>20}  {:>3}%  {}",
                bar.label,
                bar.display,
                bar.percent,
                bar.status.as_str()
            )?;
        }
        writeln!(f)?;
        for card in &self.insight_cards {
            writeln!(f, "  [{}] {}: {}", tone_marker(card.tone), card.title, card.message)?;
            writeln!(f, "      {}", card.recommendation)?;
        }
        Ok(())
    }
}

const fn tone_marker(tone: InsightTone) -> &'static str {
    match tone {
        InsightTone::Warning => "!",
        InsightTone::Info => "i",
        InsightTone::Positive => "+",
    }
}
