// ABOUTME: Immutable food records carrying per-100-unit nutrient densities
// ABOUTME: FoodProvider is the read-only catalog interface consumed by the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

use super::nutrient::{Nutrient, NutrientVector};
use serde::{Deserialize, Serialize};

/// Merge key for repeated picks of the same food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodIdentity<'a> {
    /// Catalog food number
    CatalogId(&'a str),
    /// Display name, used when the record has no food number
    Name(&'a str),
}

/// One catalog entry with its nutrient densities per 100 base units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    /// Catalog food number, when the source table provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_id: Option<String>,
    /// Display name
    pub name: String,
    /// Food group label
    #[serde(default)]
    pub category: String,
    /// Amount of each nutrient per 100 base units (grams)
    pub nutrients: NutrientVector,
}

impl FoodRecord {
    /// Create a record without a catalog food number
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        nutrients: NutrientVector,
    ) -> Self {
        Self {
            food_id: None,
            name: name.into(),
            category: category.into(),
            nutrients,
        }
    }

    /// Attach the catalog food number
    #[must_use]
    pub fn with_food_id(mut self, food_id: impl Into<String>) -> Self {
        self.food_id = Some(food_id.into());
        self
    }

    /// Density of `nutrient` per 100 base units
    #[must_use]
    pub const fn density(&self, nutrient: Nutrient) -> f64 {
        self.nutrients.get(nutrient)
    }

    /// Key used to merge repeated picks of the same food
    ///
    /// The catalog food number when present, otherwise the display name.
    /// Two distinct foods sharing a name and lacking a food number collapse
    /// into one key.
    #[must_use]
    pub fn identity(&self) -> FoodIdentity<'_> {
        self.food_id
            .as_deref()
            .map_or(FoodIdentity::Name(&self.name), FoodIdentity::CatalogId)
    }
}

/// Read-only source of food records
pub trait FoodProvider {
    /// All catalog entries
    fn list_foods(&self) -> &[FoodRecord];
}

impl FoodProvider for [FoodRecord] {
    fn list_foods(&self) -> &[FoodRecord] {
        self
    }
}

impl FoodProvider for Vec<FoodRecord> {
    fn list_foods(&self) -> &[FoodRecord] {
        self
    }
}
