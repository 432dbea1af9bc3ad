// ABOUTME: Quantity calculator and contribution math for a single pick
// ABOUTME: Converts a nutrient gap into base units, capped per pick, and scales the full profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

use nutri_core::constants::planner::REFERENCE_PORTION;
use nutri_core::models::{FoodRecord, Nutrient, NutrientVector};

/// Quantity in base units needed to close `remaining` at `density` per 100 units
///
/// Formula: min(`max_quantity`, remaining / density x 100). The cap may make
/// the pick fall short of the gap; it never shrinks a pick to fit the gap, so
/// an uncapped pick lands exactly on the target and later picks may overshoot
/// on other nutrients.
#[must_use]
pub fn quantity_for_gap(remaining: f64, density: f64, max_quantity: f64) -> f64 {
    (remaining / density * REFERENCE_PORTION).min(max_quantity)
}

/// Nutrients supplied by `quantity` base units of `food`
///
/// Every tracked nutrient is scaled, not only the one driving the pick:
/// contribution\[n\] = density\[n\] x quantity / 100.
#[must_use]
pub fn contribution(food: &FoodRecord, quantity: f64) -> NutrientVector {
    NutrientVector::from_pairs(
        Nutrient::ALL
            .into_iter()
            .map(|n| (n, food.density(n) * quantity / REFERENCE_PORTION)),
    )
}
