// ABOUTME: In-memory food catalog loaded once at startup and shared read-only
// ABOUTME: Listing, name search, category filter and calorie range queries over food records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

//! # Food Catalog
//!
//! The catalog is immutable after loading. Queries return borrowed records in
//! file order.

/// Tolerant row parsing for composition table exports
pub mod loader;

use nutri_core::constants::calorie_filter;
use nutri_core::errors::{AppError, AppResult};
use nutri_core::models::{FoodProvider, FoodRecord, Nutrient};
use std::io;
use std::path::Path;
use tracing::info;

pub use loader::parse_leading_int;

/// Immutable collection of food records
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodRecord>,
}

impl FoodCatalog {
    /// Wrap already parsed records
    #[must_use]
    pub const fn from_foods(foods: Vec<FoodRecord>) -> Self {
        Self { foods }
    }

    /// Parse a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns an `InvalidFormat` error for invalid JSON or a non-array document.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        loader::parse_catalog(json).map(Self::from_foods)
    }

    /// Load a catalog file
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the file does not exist, `StorageError`
    /// when it cannot be read and `InvalidFormat` when it cannot be parsed.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AppError::not_found(format!("Catalog file {}", path.display()))
            } else {
                AppError::storage(format!("Failed to read catalog {}: {e}", path.display()))
                    .with_source(e)
            }
        })?;

        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), foods = catalog.len(), "Food catalog loaded");
        Ok(catalog)
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// True when the catalog holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// All records in file order
    #[must_use]
    pub fn foods(&self) -> &[FoodRecord] {
        &self.foods
    }

    /// Case-insensitive substring search on the food name
    ///
    /// An empty query matches nothing.
    #[must_use]
    pub fn search_by_name(&self, query: &str) -> Vec<&FoodRecord> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.foods
            .iter()
            .filter(|food| food.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Records whose category label equals `category` exactly
    #[must_use]
    pub fn filter_by_category(&self, category: &str) -> Vec<&FoodRecord> {
        self.foods
            .iter()
            .filter(|food| food.category == category)
            .collect()
    }

    /// Records whose whole-number calorie density lies in `min..=max`
    #[must_use]
    pub fn filter_by_calories(&self, min: i64, max: i64) -> Vec<&FoodRecord> {
        self.foods
            .iter()
            .filter(|food| {
                let calories = food.density(Nutrient::Calories).trunc() as i64;
                (min..=max).contains(&calories)
            })
            .collect()
    }

    /// Distinct category labels in first-seen order
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for food in &self.foods {
            if !food.category.is_empty() && !categories.contains(&food.category.as_str()) {
                categories.push(&food.category);
            }
        }
        categories
    }
}

impl FoodProvider for FoodCatalog {
    fn list_foods(&self) -> &[FoodRecord] {
        &self.foods
    }
}

/// Resolve calorie range query parameters
///
/// Each bound is read as a leading integer; a missing or unparseable bound
/// falls back to 0 for the minimum and 1000 for the maximum.
#[must_use]
pub fn calorie_bounds(min: Option<&str>, max: Option<&str>) -> (i64, i64) {
    (
        min.and_then(parse_leading_int)
            .unwrap_or(calorie_filter::DEFAULT_MIN),
        max.and_then(parse_leading_int)
            .unwrap_or(calorie_filter::DEFAULT_MAX),
    )
}
