// ABOUTME: Food recommendation algorithms for multi-nutrient target allocation
// ABOUTME: Greedy per-nutrient selection, calorie top-up, aggregation and planner configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

#![deny(unsafe_code)]

//! # Nutri Intelligence
//!
//! The recommendation engine of Nutri Picker. Given a nutrient target and a
//! food catalog it picks foods and quantities greedily, one nutrient at a
//! time, and merges the picks into a [`Recommendation`].
//!
//! ```
//! use nutri_core::models::{FoodRecord, Nutrient, NutrientTarget, NutrientVector};
//! use nutri_intelligence::FoodPlanner;
//!
//! let foods = vec![FoodRecord::new(
//!     "Egg",
//!     "Eggs",
//!     NutrientVector::from_pairs([(Nutrient::Protein, 12.2), (Nutrient::Calories, 142.0)]),
//! )];
//! let target = NutrientTarget::daily([(Nutrient::Protein, 12.2)]);
//!
//! let recommendation = FoodPlanner::default().recommend_seeded(&target, &foods, 7);
//! assert_eq!(recommendation.foods.len(), 1);
//! ```

/// Planner configuration and its errors
pub mod config;

/// Greedy food planner
pub mod planner;

pub use config::{ConfigError, PlannerConfig};
pub use planner::{recommend, FoodPlanner, Pick, Recommendation, GREEDY_DIMENSIONS};
