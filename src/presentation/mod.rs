// ABOUTME: Presentation adapter turning engine output into dashboard-ready data
// ABOUTME: Progress bars, insight cards and chart series with no rendering logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

/// Chart series builders
pub mod charts;
/// Dashboard view model
pub mod dashboard;

pub use charts::{ChartKind, ChartSeries, Dataset};
pub use dashboard::{DashboardView, InsightCard, InsightTone, ProgressBar};
