// ABOUTME: Core data models for foods, nutrients and nutrient targets
// ABOUTME: Re-exports the nutrient, food and target types used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

/// Food records and the catalog provider trait
pub mod food;
/// Nutrient identifiers and dense nutrient vectors
pub mod nutrient;
/// Nutrient targets and planning periods
pub mod target;

pub use food::{FoodIdentity, FoodProvider, FoodRecord};
pub use nutrient::{Nutrient, NutrientVector};
pub use target::{NutrientTarget, Period};
