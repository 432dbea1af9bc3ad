// ABOUTME: Shared test utilities and fixture catalogs for integration tests
// ABOUTME: Provides quiet test logging, small food catalogs and server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutri_picker`

use nutri_core::models::{FoodRecord, Nutrient, NutrientVector};
use nutri_picker::catalog::FoodCatalog;
use nutri_picker::server::{self, ServerResources};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Shorthand for a food without a catalog number
pub fn food(name: &str, category: &str, nutrients: &[(Nutrient, f64)]) -> FoodRecord {
    FoodRecord::new(
        name,
        category,
        NutrientVector::from_pairs(nutrients.iter().copied()),
    )
}

/// Two-food catalog: A {calories 200, protein 20} and B {calories 500}
pub fn protein_and_energy_catalog() -> Vec<FoodRecord> {
    vec![
        food(
            "A",
            "test",
            &[(Nutrient::Calories, 200.0), (Nutrient::Protein, 20.0)],
        ),
        food("B", "test", &[(Nutrient::Calories, 500.0)]),
    ]
}

/// Mixed catalog covering several nutrients and categories
pub fn mixed_catalog() -> Vec<FoodRecord> {
    vec![
        food(
            "Chicken Breast",
            "Meat",
            &[
                (Nutrient::Calories, 105.0),
                (Nutrient::Protein, 23.3),
                (Nutrient::Fat, 1.9),
                (Nutrient::VitaminB6, 0.64),
                (Nutrient::Phosphorus, 220.0),
            ],
        )
        .with_food_id("11220"),
        food(
            "Salmon",
            "Fish",
            &[
                (Nutrient::Calories, 124.0),
                (Nutrient::Protein, 22.3),
                (Nutrient::Fat, 4.1),
                (Nutrient::VitaminD, 32.0),
                (Nutrient::VitaminB12, 5.9),
            ],
        )
        .with_food_id("10134"),
        food(
            "Cooked Rice",
            "Grains",
            &[
                (Nutrient::Calories, 156.0),
                (Nutrient::Protein, 2.5),
                (Nutrient::Carbs, 37.1),
                (Nutrient::Fiber, 1.5),
            ],
        )
        .with_food_id("01088"),
        food(
            "Broccoli",
            "Vegetables",
            &[
                (Nutrient::Calories, 37.0),
                (Nutrient::Protein, 5.4),
                (Nutrient::Fiber, 5.1),
                (Nutrient::VitaminC, 140.0),
                (Nutrient::VitaminK, 210.0),
                (Nutrient::Folate, 220.0),
                (Nutrient::Iron, 1.3),
            ],
        )
        .with_food_id("06264"),
        food(
            "Natto",
            "Beans",
            &[
                (Nutrient::Calories, 190.0),
                (Nutrient::Protein, 16.5),
                (Nutrient::Fat, 10.0),
                (Nutrient::Calcium, 90.0),
                (Nutrient::Iron, 3.3),
                (Nutrient::VitaminK, 600.0),
                (Nutrient::VitaminB2, 0.56),
            ],
        )
        .with_food_id("04046"),
        food(
            "Olive Oil",
            "Fats",
            &[
                (Nutrient::Calories, 894.0),
                (Nutrient::Fat, 100.0),
                (Nutrient::VitaminE, 7.4),
            ],
        )
        .with_food_id("14001"),
    ]
}

/// Sample catalog shipped with the repository
pub fn sample_catalog_json() -> &'static str {
    include_str!("../data/nutrition_data_mini.json")
}

/// Router over the given foods with default planner limits
pub fn test_router(foods: Vec<FoodRecord>) -> axum::Router {
    init_test_logging();
    let resources = Arc::new(ServerResources::with_catalog(FoodCatalog::from_foods(foods)));
    server::router(&resources)
}
