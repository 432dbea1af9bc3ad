// ABOUTME: Greedy selector walking a ranked candidate list and recording picks
// ABOUTME: Shared running totals, per-pass pick cap and optional wrap-around revisiting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

use super::quantity::{contribution, quantity_for_gap};
use nutri_core::models::{FoodRecord, Nutrient, NutrientVector};
use serde::Serialize;
use tracing::debug;

/// One selection of a food at a quantity, or several merged selections
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pick<'a> {
    /// Catalog record the pick refers to
    #[serde(flatten)]
    pub food: &'a FoodRecord,
    /// Quantity in base units (grams)
    pub quantity: f64,
    /// Nutrients supplied at this quantity
    pub contribution: NutrientVector,
    /// Number of selection events merged into this pick
    pub selections: u32,
}

impl<'a> Pick<'a> {
    /// Single selection of `food` at `quantity`
    #[must_use]
    pub fn new(food: &'a FoodRecord, quantity: f64) -> Self {
        Self {
            food,
            quantity,
            contribution: contribution(food, quantity),
            selections: 1,
        }
    }

    /// Fold another pick of the same food into this one
    ///
    /// Quantities, contributions and selection counts add up. The contribution
    /// is never re-derived from the merged quantity.
    pub fn merge(&mut self, other: &Self) {
        self.quantity += other.quantity;
        self.contribution += &other.contribution;
        self.selections += other.selections;
    }
}

/// Running state of one recommendation: totals and the ordered pick list
#[derive(Debug, Clone, Default)]
pub struct SelectionState<'a> {
    /// Nutrients accumulated so far
    pub totals: NutrientVector,
    /// Picks in selection order, before aggregation
    pub picks: Vec<Pick<'a>>,
}

impl<'a> SelectionState<'a> {
    /// Empty state with zero totals
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, pick: Pick<'a>, driver: Nutrient) {
        self.totals += &pick.contribution;
        debug!(
            food = %pick.food.name,
            driver = %driver,
            quantity = pick.quantity,
            total = self.totals[driver],
            "Recorded pick"
        );
        self.picks.push(pick);
    }
}

/// Limits applied to a single selector pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassLimits {
    /// Maximum picks the pass may make
    pub max_picks: usize,
    /// Largest quantity of one pick
    pub max_quantity: f64,
    /// Wrap to the head of the ranked list after a productive traversal
    pub revisit: bool,
}

/// Run one greedy pass for `nutrient` against `target_amount`
///
/// Walks `ranked` in order, stopping once the running total reaches the
/// target or `limits.max_picks` picks were made. With `limits.revisit` a
/// traversal that made at least one pick starts over from the head of the
/// list. Returns the number of picks made.
pub fn run_pass<'a>(
    state: &mut SelectionState<'a>,
    ranked: &[&'a FoodRecord],
    nutrient: Nutrient,
    target_amount: f64,
    limits: &PassLimits,
) -> usize {
    let mut made = 0;

    loop {
        let mut made_this_traversal = 0;

        for &food in ranked {
            if state.totals[nutrient] >= target_amount || made >= limits.max_picks {
                return made;
            }

            let density = food.density(nutrient);
            if density <= 0.0 {
                continue;
            }

            let remaining = target_amount - state.totals[nutrient];
            let quantity = quantity_for_gap(remaining, density, limits.max_quantity);
            if quantity > 0.0 {
                state.record(Pick::new(food, quantity), nutrient);
                made += 1;
                made_this_traversal += 1;
            }
        }

        if !limits.revisit || made_this_traversal == 0 {
            return made;
        }
    }
}
