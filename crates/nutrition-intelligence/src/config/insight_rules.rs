// ABOUTME: Threshold configuration for the daily insight rules
// ABOUTME: Calorie/protein deficit and surplus ratios, macro shares and the evening cutoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

use super::{apply_env_var, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Thresholds for the insight rule engine
///
/// Ratios are fractions of the matching goal; shares are fractions of the
/// calorie-equivalent macro total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightRulesConfig {
    /// Calories below `goal x ratio` trigger a deficit warning (0.8)
    pub calorie_deficit_ratio: f64,
    /// Calories above `goal x ratio` trigger a surplus note (1.1)
    pub calorie_surplus_ratio: f64,
    /// Protein below `goal x ratio` triggers a deficit warning (0.8)
    pub protein_deficit_ratio: f64,
    /// Protein share of macro calories above this is praised (0.35)
    pub high_protein_share: f64,
    /// Carb share of macro calories below this is flagged (0.25)
    pub low_carb_share: f64,
    /// Hours strictly after this count as evening (18)
    pub evening_after_hour: u32,
    /// Evening calories below `goal x ratio` trigger a dinner reminder (0.7)
    pub evening_low_intake_ratio: f64,
}

impl Default for InsightRulesConfig {
    fn default() -> Self {
        Self {
            calorie_deficit_ratio: 0.8,
            calorie_surplus_ratio: 1.1,
            protein_deficit_ratio: 0.8,
            high_protein_share: 0.35,
            low_carb_share: 0.25,
            evening_after_hour: 18,
            evening_low_intake_ratio: 0.7,
        }
    }
}

impl InsightRulesConfig {
    /// Defaults with `NUTRITION_INSIGHT_*` environment overrides applied, then validated
    ///
    /// # Errors
    ///
    /// Returns an error if a variable does not parse or the result fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        apply_env_var(
            "NUTRITION_INSIGHT_CALORIE_DEFICIT_RATIO",
            &mut config.calorie_deficit_ratio,
        )?;
        apply_env_var(
            "NUTRITION_INSIGHT_CALORIE_SURPLUS_RATIO",
            &mut config.calorie_surplus_ratio,
        )?;
        apply_env_var(
            "NUTRITION_INSIGHT_PROTEIN_DEFICIT_RATIO",
            &mut config.protein_deficit_ratio,
        )?;
        apply_env_var(
            "NUTRITION_INSIGHT_HIGH_PROTEIN_SHARE",
            &mut config.high_protein_share,
        )?;
        apply_env_var(
            "NUTRITION_INSIGHT_LOW_CARB_SHARE",
            &mut config.low_carb_share,
        )?;
        apply_env_var(
            "NUTRITION_INSIGHT_EVENING_AFTER_HOUR",
            &mut config.evening_after_hour,
        )?;
        apply_env_var(
            "NUTRITION_INSIGHT_EVENING_LOW_INTAKE_RATIO",
            &mut config.evening_low_intake_ratio,
        )?;

        config.validate()?;
        debug!(?config, "Insight rule thresholds loaded");
        Ok(config)
    }

    /// Validate the thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a ratio outside (0, 3] or a
    /// share outside (0, 1), and `ConfigError::InvalidRange` when the deficit
    /// ratio is not below the surplus ratio
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratios = [
            self.calorie_deficit_ratio,
            self.calorie_surplus_ratio,
            self.protein_deficit_ratio,
            self.evening_low_intake_ratio,
        ];
        if ratios.iter().any(|r| !(r.is_finite() && *r > 0.0 && *r <= 3.0)) {
            return Err(ConfigError::ValueOutOfRange(
                "Goal ratios must be between 0 (exclusive) and 3",
            ));
        }

        if self.calorie_deficit_ratio >= self.calorie_surplus_ratio {
            return Err(ConfigError::InvalidRange(
                "calorie_deficit_ratio must be < calorie_surplus_ratio",
            ));
        }

        let shares = [self.high_protein_share, self.low_carb_share];
        if shares.iter().any(|s| !(s.is_finite() && *s > 0.0 && *s < 1.0)) {
            return Err(ConfigError::ValueOutOfRange(
                "Macro shares must be between 0 and 1 (exclusive)",
            ));
        }

        if self.evening_after_hour > 23 {
            return Err(ConfigError::ValueOutOfRange(
                "evening_after_hour must be between 0 and 23",
            ));
        }

        Ok(())
    }
}
