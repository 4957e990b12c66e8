// ABOUTME: Static food catalog with per-serving nutrients and keyword search
// ABOUTME: Case-insensitive substring search over names and search terms, capped at five results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

//! Food Catalog
//!
//! A fixed lookup table of everyday foods. Items are defined at compile time
//! and never change; search is a linear scan in catalog order, so the first
//! matching items win and no relevance ranking is applied.

use nutrition_core::constants::search::{MAX_SEARCH_RESULTS, MIN_QUERY_CHARS};
use nutrition_core::models::{FoodItem, Nutrients};
use tracing::debug;

macro_rules! food {
    ($id:expr, $name:expr, $serving:expr, [$kcal:expr, $p:expr, $c:expr, $f:expr, $fib:expr, $sug:expr], [$($term:expr),* $(,)?]) => {
        FoodItem {
            id: $id,
            name: $name,
            serving: $serving,
            nutrients: Nutrients::new($kcal, $p, $c, $f, $fib, $sug),
            search_terms: &[$($term),*],
        }
    };
}

/// Built-in catalog: `[calories, protein, carbs, fat, fiber, sugar]` per serving
#[rustfmt::skip]
static BUILTIN_FOODS: &[FoodItem] = &[
    food!(1, "Oatmeal", "1 cup cooked", [158.0, 6.0, 27.0, 3.2, 4.0, 1.1], ["oats", "oatmeal", "porridge", "breakfast", "grain"]),
    food!(2, "Banana", "1 medium", [105.0, 1.3, 27.0, 0.4, 3.1, 14.4], ["banana", "fruit"]),
    food!(3, "Egg", "1 large", [72.0, 6.3, 0.4, 4.8, 0.0, 0.2], ["egg", "eggs", "breakfast", "protein"]),
    food!(4, "Greek Yogurt", "170 g", [100.0, 17.0, 6.0, 0.7, 0.0, 6.0], ["yogurt", "greek", "dairy", "protein"]),
    food!(5, "Chicken Breast", "100 g", [165.0, 31.0, 0.0, 3.6, 0.0, 0.0], ["chicken", "poultry", "meat", "protein"]),
    food!(6, "Brown Rice", "1 cup cooked", [216.0, 5.0, 45.0, 1.8, 3.5, 0.7], ["rice", "grain", "whole grain"]),
    food!(7, "Salmon", "100 g", [208.0, 20.0, 0.0, 13.0, 0.0, 0.0], ["salmon", "fish", "seafood", "omega-3"]),
    food!(8, "Broccoli", "1 cup", [31.0, 2.5, 6.0, 0.3, 2.4, 1.5], ["broccoli", "vegetable", "greens"]),
    food!(9, "Spinach", "1 cup raw", [7.0, 0.9, 1.1, 0.1, 0.7, 0.1], ["spinach", "greens", "vegetable", "leafy"]),
    food!(10, "Almonds", "1 oz", [164.0, 6.0, 6.0, 14.0, 3.5, 1.2], ["almond", "nuts", "snack"]),
    food!(11, "Cheddar Cheese", "1 oz", [113.0, 7.0, 0.4, 9.3, 0.0, 0.1], ["cheese", "cheddar", "dairy"]),
    food!(12, "Apple", "1 medium", [95.0, 0.5, 25.0, 0.3, 4.4, 18.9], ["apple", "fruit"]),
    food!(13, "Whole Wheat Bread", "1 slice", [81.0, 4.0, 14.0, 1.1, 1.9, 1.4], ["bread", "toast", "whole wheat", "grain"]),
    food!(14, "Peanut Butter", "2 tbsp", [188.0, 8.0, 6.0, 16.0, 1.9, 3.0], ["peanut", "nut butter", "spread"]),
    food!(15, "Avocado", "1/2 fruit", [120.0, 1.5, 6.4, 11.0, 5.0, 0.5], ["avocado", "fruit", "healthy fat"]),
    food!(16, "Sweet Potato", "1 medium", [103.0, 2.3, 24.0, 0.2, 3.8, 7.4], ["sweet potato", "potato", "vegetable"]),
    food!(17, "Chickpeas", "1 cup cooked", [269.0, 14.5, 45.0, 4.2, 12.5, 7.9], ["chickpea", "garbanzo", "legume", "beans"]),
    food!(18, "Milk (2%)", "1 cup", [122.0, 8.0, 12.0, 4.8, 0.0, 12.0], ["milk", "dairy"]),
    food!(19, "Lentils", "1 cup cooked", [230.0, 18.0, 40.0, 0.8, 15.6, 3.6], ["lentil", "legume", "beans"]),
    food!(20, "Quinoa", "1 cup cooked", [222.0, 8.0, 39.0, 3.6, 5.2, 1.6], ["quinoa", "grain"]),
    food!(21, "Tuna", "1 can", [191.0, 42.0, 0.0, 1.4, 0.0, 0.0], ["tuna", "fish", "seafood"]),
    food!(22, "Blueberries", "1 cup", [84.0, 1.1, 21.0, 0.5, 3.6, 15.0], ["blueberry", "berries", "fruit"]),
    food!(23, "Pasta", "1 cup cooked", [221.0, 8.0, 43.0, 1.3, 2.5, 0.8], ["pasta", "spaghetti", "noodles"]),
    food!(24, "Peach", "1 medium", [59.0, 1.4, 14.0, 0.4, 2.3, 12.6], ["peach", "fruit", "stone fruit"]),
    food!(25, "Dark Chocolate", "1 oz", [170.0, 2.2, 13.0, 12.0, 3.1, 6.8], ["chocolate", "cocoa", "dessert", "sweet"]),
];

/// Read-only food lookup table
#[derive(Debug, Clone, Copy)]
pub struct FoodCatalog {
    items: &'static [FoodItem],
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FoodCatalog {
    /// The built-in catalog
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            items: BUILTIN_FOODS,
        }
    }

    /// Number of items
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &'static FoodItem> {
        self.items.iter()
    }

    /// Look up an item by identifier
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&'static FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Up to five items whose name or search terms contain `query`
    ///
    /// Matching is case-insensitive. A query shorter than two characters
    /// (after trimming) is treated as "not searching yet" and returns nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&'static FoodItem> {
        let needle = query.trim().to_lowercase();
        if needle.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let results: Vec<&'static FoodItem> = self
            .items
            .iter()
            .filter(|item| matches_query(item, &needle))
            .take(MAX_SEARCH_RESULTS)
            .collect();

        debug!(query = %needle, result_count = results.len(), "Food catalog search");
        results
    }
}

fn matches_query(item: &FoodItem, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle)
        || item
            .search_terms
            .iter()
            .any(|term| term.to_lowercase().contains(needle))
}
