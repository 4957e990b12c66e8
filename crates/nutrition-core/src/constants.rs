// ABOUTME: Application-wide constants for nutrition tracking
// ABOUTME: Default goals, energy conversion factors, status thresholds and search limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

//! Constants organized by domain

/// Default daily nutrient targets used when a user has never saved goals
pub mod default_goals {
    /// Calories (kcal)
    pub const CALORIES: f64 = 2000.0;
    /// Protein (g)
    pub const PROTEIN_G: f64 = 150.0;
    /// Carbohydrates (g)
    pub const CARBS_G: f64 = 225.0;
    /// Fat (g)
    pub const FAT_G: f64 = 67.0;
    /// Fiber (g)
    pub const FIBER_G: f64 = 25.0;
    /// Sugar (g)
    pub const SUGAR_G: f64 = 50.0;
}

/// Atwater energy factors (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrates: 4 kcal/g
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Goal progress classification (percent of goal)
pub mod goal_status {
    /// At or above this percent a nutrient is on track
    pub const ON_TRACK_MIN_PERCENT: u32 = 90;
    /// At or above this percent (and below on-track) a nutrient is near its goal
    pub const NEAR_MIN_PERCENT: u32 = 70;
    /// Progress is reported as at most this percent
    pub const MAX_PERCENT: u32 = 100;
}

/// Food catalog search behavior
pub mod search {
    /// Queries shorter than this (in characters) return nothing
    pub const MIN_QUERY_CHARS: usize = 2;
    /// Maximum number of results returned by a search
    pub const MAX_SEARCH_RESULTS: usize = 5;
}

/// Dashboard presentation defaults
pub mod dashboard {
    /// Number of days shown in the calorie trend chart
    pub const DEFAULT_TREND_DAYS: u32 = 7;
    /// Upper bound for the trend window
    pub const MAX_TREND_DAYS: u32 = 31;
}

/// Service identifiers used in logs and error messages
pub mod service_names {
    /// Name of the tracker service
    pub const NUTRITION_TRACKER: &str = "nutrition-tracker";
    /// Name of the external per-user document store
    pub const DOCUMENT_STORE: &str = "document store";
}
