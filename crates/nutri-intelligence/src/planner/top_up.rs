// ABOUTME: Calorie top-up pass run after the per-nutrient passes
// ABOUTME: Ranks by calorie density and fills the remaining energy gap with a separate cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

use super::ranking::rank_by_density;
use super::selector::{run_pass, PassLimits, SelectionState};
use nutri_core::models::{FoodRecord, Nutrient};
use rand::Rng;

/// Top up calories when the per-nutrient passes left an energy gap
///
/// Does nothing when the running calorie total already reaches
/// `target_calories`. Returns the number of picks made.
pub fn calorie_top_up<'a, R: Rng + ?Sized>(
    state: &mut SelectionState<'a>,
    foods: &'a [FoodRecord],
    target_calories: f64,
    limits: &PassLimits,
    rng: &mut R,
) -> usize {
    if state.totals[Nutrient::Calories] >= target_calories {
        return 0;
    }

    let ranked = rank_by_density(foods, Nutrient::Calories, rng);
    run_pass(state, &ranked, Nutrient::Calories, target_calories, limits)
}
