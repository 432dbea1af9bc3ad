// ABOUTME: Aggregator merging repeated picks of the same food into one line
// ABOUTME: Builds the Recommendation with total nutrition and the adjusted target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

use super::selector::Pick;
use nutri_core::models::{FoodIdentity, NutrientVector, Period};
use serde::Serialize;
use std::collections::HashMap;

/// Merge picks sharing a food identity, keeping first-seen order
///
/// Aggregating an already aggregated list returns it unchanged.
#[must_use]
pub fn aggregate_picks<'a>(picks: &[Pick<'a>]) -> Vec<Pick<'a>> {
    let mut positions: HashMap<FoodIdentity<'a>, usize> = HashMap::with_capacity(picks.len());
    let mut merged: Vec<Pick<'a>> = Vec::with_capacity(picks.len());

    for pick in picks {
        let food = pick.food;
        if let Some(&index) = positions.get(&food.identity()) {
            merged[index].merge(pick);
        } else {
            positions.insert(food.identity(), merged.len());
            merged.push(pick.clone());
        }
    }

    merged
}

/// Final recommendation for one target
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation<'a> {
    /// One entry per distinct food, in first-selected order
    pub foods: Vec<Pick<'a>>,
    /// Elementwise sum of every individual pick's contribution
    pub total_nutrition: NutrientVector,
    /// Target after period scaling that the picks were chosen against
    pub adjusted_target: NutrientVector,
    /// Period of the requested target
    pub period: Period,
    /// Selection events before aggregation
    pub pick_count: usize,
}

impl<'a> Recommendation<'a> {
    /// Aggregate raw picks into a recommendation
    #[must_use]
    pub fn from_picks(picks: &[Pick<'a>], adjusted_target: NutrientVector, period: Period) -> Self {
        Self {
            foods: aggregate_picks(picks),
            total_nutrition: picks.iter().map(|pick| &pick.contribution).sum(),
            adjusted_target,
            period,
            pick_count: picks.len(),
        }
    }

    /// True when no food was selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Total quantity in base units across all foods
    #[must_use]
    pub fn total_quantity(&self) -> f64 {
        self.foods.iter().map(|pick| pick.quantity).sum()
    }
}
