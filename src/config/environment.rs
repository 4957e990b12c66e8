// ABOUTME: Environment-based configuration for the nutrition tracker
// ABOUTME: Default goals, dashboard trend window, insight thresholds and logging from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

//! Environment-based configuration
//!
//! Every setting has a default; environment variables override individual
//! values and the merged result is validated once at load time.

use crate::logging::LoggingConfig;
use nutrition_core::constants::dashboard::{DEFAULT_TREND_DAYS, MAX_TREND_DAYS};
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{Nutrient, NutritionGoals};
use nutrition_intelligence::config::apply_env_var;
use nutrition_intelligence::InsightRulesConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{debug, info};

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Environment variable holding the goal override for each nutrient
const GOAL_ENV_VARS: [(Nutrient, &str); 6] = [
    (Nutrient::Calories, "NUTRITION_GOAL_CALORIES"),
    (Nutrient::Protein, "NUTRITION_GOAL_PROTEIN"),
    (Nutrient::Carbs, "NUTRITION_GOAL_CARBS"),
    (Nutrient::Fat, "NUTRITION_GOAL_FAT"),
    (Nutrient::Fiber, "NUTRITION_GOAL_FIBER"),
    (Nutrient::Sugar, "NUTRITION_GOAL_SUGAR"),
];

/// Tracker configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Goals used for users without saved goals
    pub default_goals: NutritionGoals,
    /// Number of days shown in the dashboard trend chart
    pub trend_days: u32,
    /// Insight rule thresholds
    pub insight_rules: InsightRulesConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            default_goals: NutritionGoals::default(),
            trend_days: DEFAULT_TREND_DAYS,
            insight_rules: InsightRulesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if any variable fails to parse or the merged
    /// configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        );

        let mut default_goals = NutritionGoals::default();
        for (nutrient, var) in GOAL_ENV_VARS {
            let mut value = default_goals.get(nutrient);
            apply_env_var(var, &mut value)?;
            default_goals.set(nutrient, value);
        }

        let mut trend_days = DEFAULT_TREND_DAYS;
        apply_env_var("NUTRITION_TREND_DAYS", &mut trend_days)?;

        let config = Self {
            environment,
            default_goals,
            trend_days,
            insight_rules: InsightRulesConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        };
        config.validate()?;

        debug!(?config, "Tracker configuration loaded");
        Ok(config)
    }

    /// Validate the merged configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for negative or non-finite goals, a trend
    /// window outside 1..=31 days or invalid insight thresholds
    pub fn validate(&self) -> AppResult<()> {
        self.default_goals
            .validate()
            .map_err(|e| AppError::config(format!("Invalid default goals: {}", e.message)))?;

        if !(1..=MAX_TREND_DAYS).contains(&self.trend_days) {
            return Err(AppError::config(format!(
                "NUTRITION_TREND_DAYS must be between 1 and {MAX_TREND_DAYS}, got {}",
                self.trend_days
            )));
        }

        self.insight_rules.validate()?;
        Ok(())
    }

    /// Log a one-line summary of the effective settings
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            calorie_goal = self.default_goals.calories,
            protein_goal = self.default_goals.protein,
            trend_days = self.trend_days,
            "Tracker configuration"
        );
    }
}
