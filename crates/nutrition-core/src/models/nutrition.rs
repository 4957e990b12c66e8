// ABOUTME: Nutrition tracking models for daily food intake
// ABOUTME: Nutrient, Nutrients, FoodItem, MealSlot, LogEntry, NutritionGoals and DailyTotals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

use crate::constants::{default_goals, energy};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// One of the six tracked nutrients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbs,
    /// Fat (g)
    Fat,
    /// Dietary fiber (g)
    Fiber,
    /// Sugar (g)
    Sugar,
}

impl Nutrient {
    /// All nutrients in display order
    pub const ALL: [Self; 6] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fat,
        Self::Fiber,
        Self::Sugar,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Protein => "Protein",
            Self::Carbs => "Carbs",
            Self::Fat => "Fat",
            Self::Fiber => "Fiber",
            Self::Sugar => "Sugar",
        }
    }

    /// Measurement unit
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein | Self::Carbs | Self::Fat | Self::Fiber | Self::Sugar => "g",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Amounts of the six tracked nutrients
///
/// Every field defaults to zero when absent from a persisted document, so a
/// partially filled entry contributes zero for the missing nutrients instead
/// of failing to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat: f64,
    /// Fiber (g)
    #[serde(default)]
    pub fiber: f64,
    /// Sugar (g)
    #[serde(default)]
    pub sugar: f64,
}

impl Nutrients {
    /// All-zero amounts
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    /// Build from the six amounts in display order
    #[must_use]
    pub const fn new(
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        fiber: f64,
        sugar: f64,
    ) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber,
            sugar,
        }
    }

    /// Amount for one nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
        }
    }

    /// Every amount multiplied by `multiplier`
    #[must_use]
    pub fn scaled(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            fiber: self.fiber * multiplier,
            sugar: self.sugar * multiplier,
        }
    }

    /// Calorie equivalents of protein, carbs and fat
    #[must_use]
    pub fn macro_calories(&self) -> MacroCalories {
        MacroCalories {
            protein: self.protein * energy::KCAL_PER_G_PROTEIN,
            carbs: self.carbs * energy::KCAL_PER_G_CARBS,
            fat: self.fat * energy::KCAL_PER_G_FAT,
        }
    }

    /// Check that every amount is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending nutrient
    pub fn validate(&self) -> AppResult<()> {
        for nutrient in Nutrient::ALL {
            let amount = self.get(nutrient);
            if !amount.is_finite() || amount < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{nutrient} must be a non-negative number, got {amount}"
                )));
            }
        }
        Ok(())
    }
}

impl Add for Nutrients {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
            fiber: self.fiber + rhs.fiber,
            sugar: self.sugar + rhs.sugar,
        }
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Nutrients {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Calorie contribution of each macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroCalories {
    /// Protein grams x 4
    pub protein: f64,
    /// Carbohydrate grams x 4
    pub carbs: f64,
    /// Fat grams x 9
    pub fat: f64,
}

impl MacroCalories {
    /// Sum of the three contributions
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }

    /// Share of protein and carbs in the macro total, `None` when the total is zero
    #[must_use]
    pub fn ratios(&self) -> Option<(f64, f64)> {
        let total = self.total();
        (total > 0.0).then(|| (self.protein / total, self.carbs / total))
    }
}

/// Catalog entry describing one food per reference serving
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    /// Stable catalog identifier
    pub id: u32,
    /// Display name
    pub name: &'static str,
    /// Reference serving ("1 cup", "100 g")
    pub serving: &'static str,
    /// Nutrients for one reference serving
    pub nutrients: Nutrients,
    /// Lowercase keywords used by search
    pub search_terms: &'static [&'static str],
}

/// Meal a log entry belongs to
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snack between meals
    #[default]
    Snack,
}

impl MealSlot {
    /// All slots in chronological order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Parse a slot name, falling back to `Snack` for anything unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const fn default_servings() -> f64 {
    1.0
}

/// One recorded consumption event
///
/// Nutrients are stored already scaled by `servings`. Entries are never
/// mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Descriptive label
    pub food_name: String,
    /// Scaled nutrient amounts
    #[serde(flatten)]
    pub nutrients: Nutrients,
    /// Serving multiplier applied at creation
    #[serde(default = "default_servings")]
    pub servings: f64,
    /// Day the entry counts toward
    pub date: NaiveDate,
    /// Creation instant, used for ordering and display
    pub timestamp: DateTime<Utc>,
    /// Meal the entry belongs to
    #[serde(default)]
    pub meal_slot: MealSlot,
}

impl LogEntry {
    /// Create an entry from a catalog item, scaling its nutrients by `servings`
    ///
    /// The entry counts toward the calendar day of `logged_at` in its own
    /// time zone; the instant is stored in UTC.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `servings` is not a positive finite number
    pub fn from_food_item<Tz: TimeZone>(
        item: &FoodItem,
        servings: f64,
        meal_slot: MealSlot,
        logged_at: &DateTime<Tz>,
    ) -> AppResult<Self> {
        validate_servings(servings)?;
        let entry = Self {
            food_name: item.name.to_owned(),
            nutrients: item.nutrients.scaled(servings),
            servings,
            date: logged_at.date_naive(),
            timestamp: logged_at.with_timezone(&Utc),
            meal_slot,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Create a free-text entry; `per_serving` is scaled by `servings`
    ///
    /// The calendar day comes from `logged_at` as for
    /// [`LogEntry::from_food_item`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty name, non-positive servings or
    /// negative nutrient amounts
    pub fn custom<Tz: TimeZone>(
        food_name: impl Into<String>,
        per_serving: Nutrients,
        servings: f64,
        meal_slot: MealSlot,
        logged_at: &DateTime<Tz>,
    ) -> AppResult<Self> {
        let food_name = food_name.into();
        if food_name.trim().is_empty() {
            return Err(AppError::invalid_input("Food name cannot be empty"));
        }
        validate_servings(servings)?;
        let entry = Self {
            food_name,
            nutrients: per_serving.scaled(servings),
            servings,
            date: logged_at.date_naive(),
            timestamp: logged_at.with_timezone(&Utc),
            meal_slot,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Check the entry invariants: positive servings, non-negative nutrients
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` describing the violated invariant
    pub fn validate(&self) -> AppResult<()> {
        validate_servings(self.servings)?;
        self.nutrients
            .validate()
            .map_err(|e| e.with_resource_id(self.food_name.clone()))
    }
}

fn validate_servings(servings: f64) -> AppResult<()> {
    if servings.is_finite() && servings > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "Servings must be a positive number, got {servings}"
        )))
    }
}

/// Per-user daily targets for the six nutrients
///
/// Fields missing from a persisted document fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionGoals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Fiber (g)
    pub fiber: f64,
    /// Sugar (g)
    pub sugar: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: default_goals::CALORIES,
            protein: default_goals::PROTEIN_G,
            carbs: default_goals::CARBS_G,
            fat: default_goals::FAT_G,
            fiber: default_goals::FIBER_G,
            sugar: default_goals::SUGAR_G,
        }
    }
}

impl NutritionGoals {
    /// Target for one nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
        }
    }

    /// Replace the target for one nutrient
    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        match nutrient {
            Nutrient::Calories => self.calories = value,
            Nutrient::Protein => self.protein = value,
            Nutrient::Carbs => self.carbs = value,
            Nutrient::Fat => self.fat = value,
            Nutrient::Fiber => self.fiber = value,
            Nutrient::Sugar => self.sugar = value,
        }
    }

    /// Check that every target is finite and non-negative
    ///
    /// A zero target is allowed and means "no target".
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending nutrient
    pub fn validate(&self) -> AppResult<()> {
        for nutrient in Nutrient::ALL {
            let value = self.get(nutrient);
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{nutrient} goal must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Sum of all entries logged for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Day the totals belong to
    pub date: NaiveDate,
    /// Summed nutrient amounts
    pub nutrients: Nutrients,
    /// Number of entries summed
    pub entry_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_missing_nutrient_fields_default_to_zero() {
        let json = r#"{
            "foodName": "Mystery bar",
            "calories": 210,
            "date": "2025-03-01",
            "timestamp": "2025-03-01T10:15:00Z"
        }"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();

        assert!((entry.nutrients.calories - 210.0).abs() < f64::EPSILON);
        assert!(entry.nutrients.protein.abs() < f64::EPSILON);
        assert!(entry.nutrients.sugar.abs() < f64::EPSILON);
        assert!((entry.servings - 1.0).abs() < f64::EPSILON);
        assert_eq!(entry.meal_slot, MealSlot::Snack);
    }

    #[test]
    fn test_partial_goals_fall_back_to_defaults() {
        let goals: NutritionGoals = serde_json::from_str(r#"{"calories": 1800}"#).unwrap();

        assert!((goals.calories - 1800.0).abs() < f64::EPSILON);
        assert!((goals.protein - default_goals::PROTEIN_G).abs() < f64::EPSILON);
        assert!((goals.sugar - default_goals::SUGAR_G).abs() < f64::EPSILON);
    }

    #[test]
    fn test_custom_entry_scales_by_servings() {
        let per_serving = Nutrients::new(100.0, 10.0, 5.0, 2.0, 1.0, 0.5);
        let entry = LogEntry::custom("Yogurt", per_serving, 1.5, MealSlot::Breakfast, &noon())
            .unwrap();

        assert!((entry.nutrients.calories - 150.0).abs() < 1e-9);
        assert!((entry.nutrients.protein - 15.0).abs() < 1e-9);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_entry_date_follows_the_logging_time_zone() {
        // 21:00 on 03-14 at UTC-5 is 02:00 on 03-15 in UTC
        let eastern = chrono::FixedOffset::west_opt(5 * 3600).unwrap();
        let evening = eastern.with_ymd_and_hms(2025, 3, 14, 21, 0, 0).unwrap();
        let entry = LogEntry::custom(
            "Pasta",
            Nutrients::new(600.0, 20.0, 90.0, 15.0, 4.0, 6.0),
            1.0,
            MealSlot::Dinner,
            &evening,
        )
        .unwrap();

        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(
            entry.timestamp,
            Utc.with_ymd_and_hms(2025, 3, 15, 2, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_entry_rejects_non_positive_servings() {
        let per_serving = Nutrients::new(100.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        for servings in [0.0, -1.0, f64::NAN] {
            let err = LogEntry::custom("Toast", per_serving, servings, MealSlot::Snack, &noon())
                .unwrap_err();
            assert_eq!(err.code, crate::errors::ErrorCode::InvalidInput);
        }
    }

    #[test]
    fn test_entry_rejects_negative_nutrients() {
        let per_serving = Nutrients::new(100.0, -3.0, 0.0, 0.0, 0.0, 0.0);
        let err =
            LogEntry::custom("Toast", per_serving, 1.0, MealSlot::Snack, &noon()).unwrap_err();
        assert!(err.message.contains("Protein"));
    }

    #[test]
    fn test_meal_slot_parsing() {
        assert_eq!(MealSlot::from_str_lossy("Breakfast"), MealSlot::Breakfast);
        assert_eq!(MealSlot::from_str_lossy(" dinner "), MealSlot::Dinner);
        assert_eq!(MealSlot::from_str_lossy("brunch"), MealSlot::Snack);
    }

    #[test]
    fn test_macro_ratios_none_when_empty() {
        assert!(Nutrients::ZERO.macro_calories().ratios().is_none());

        let mixed = Nutrients::new(0.0, 25.0, 50.0, 0.0, 0.0, 0.0).macro_calories();
        let (protein, carbs) = mixed.ratios().unwrap();
        assert!((protein - 1.0 / 3.0).abs() < 1e-9);
        assert!((carbs - 2.0 / 3.0).abs() < 1e-9);
    }
}
