// ABOUTME: Benchmark fixture generators for food catalogs
// ABOUTME: Builds deterministic catalogs and their JSON source text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

use nutri_core::models::{FoodRecord, Nutrient, NutrientVector};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::{Map, Value};

/// Catalog size presets for benchmarks
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Small catalog (50 foods) - quick benchmarks
    Small,
    /// Medium catalog (500 foods) - a regional food table
    Medium,
    /// Large catalog (2500 foods) - a full national food table
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 500,
            Self::Large => 2500,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

const CATEGORIES: [&str; 6] = ["穀類", "野菜類", "魚介類", "肉類", "豆類", "乳類"];

/// Generate a catalog of `count` foods with sparse, seeded nutrient densities
#[must_use]
pub fn generate_foods(count: usize) -> Vec<FoodRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    (0..count)
        .map(|i| {
            let mut nutrients = NutrientVector::zero();
            for nutrient in Nutrient::ALL {
                // Roughly a third of the columns are empty, like real tables
                if rng.gen_bool(0.66) {
                    nutrients.set(nutrient, rng.gen_range(0.0..upper_bound(nutrient)));
                }
            }
            FoodRecord::new(
                format!("food {i:05}"),
                CATEGORIES[i % CATEGORIES.len()],
                nutrients,
            )
            .with_food_id(format!("{i:05}"))
        })
        .collect()
}

/// Render foods as catalog JSON using the source table's column names
#[must_use]
pub fn catalog_json(foods: &[FoodRecord]) -> String {
    let rows: Vec<Value> = foods
        .iter()
        .map(|food| {
            let mut row = Map::new();
            row.insert("食品名".into(), Value::String(food.name.clone()));
            row.insert("食品群".into(), Value::String(food.category.clone()));
            if let Some(id) = &food.food_id {
                row.insert("食品番号".into(), Value::String(id.clone()));
            }
            for (nutrient, amount) in food.nutrients.iter() {
                let cell = if amount <= 0.0 {
                    "Tr".to_owned()
                } else {
                    format!("{amount:.1}")
                };
                row.insert(nutrient.catalog_column().into(), Value::String(cell));
            }
            Value::Object(row)
        })
        .collect();
    Value::Array(rows).to_string()
}

const fn upper_bound(nutrient: Nutrient) -> f64 {
    match nutrient {
        Nutrient::Calories => 600.0,
        Nutrient::Sodium | Nutrient::Potassium => 1500.0,
        Nutrient::Calcium | Nutrient::Magnesium | Nutrient::VitaminA => 400.0,
        Nutrient::Folate | Nutrient::VitaminK => 300.0,
        _ => 30.0,
    }
}
