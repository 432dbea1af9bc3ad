// ABOUTME: Category ranker ordering candidate foods by density for one nutrient
// ABOUTME: Shuffle-then-stable-sort so equal densities come out in random order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

use nutri_core::models::{FoodRecord, Nutrient};
use rand::seq::SliceRandom;
use rand::Rng;

/// Rank foods with a positive density for `nutrient`, densest first
///
/// Foods without the nutrient are dropped. The survivors are shuffled with an
/// unbiased Fisher-Yates permutation before a stable descending sort, so ties
/// in density keep the random order. The result is reproducible only when
/// `rng` is seeded.
#[must_use]
pub fn rank_by_density<'a, R: Rng + ?Sized>(
    foods: &'a [FoodRecord],
    nutrient: Nutrient,
    rng: &mut R,
) -> Vec<&'a FoodRecord> {
    let mut ranked: Vec<&FoodRecord> = foods
        .iter()
        .filter(|food| food.density(nutrient) > 0.0)
        .collect();

    ranked.shuffle(rng);
    ranked.sort_by(|a, b| b.density(nutrient).total_cmp(&a.density(nutrient)));
    ranked
}
