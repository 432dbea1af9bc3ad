// ABOUTME: Greedy multi-nutrient food planner assembling a bundle of foods for a target
// ABOUTME: Per-nutrient passes in fixed order, a calorie top-up and aggregation of repeated picks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

//! # Food Planner
//!
//! Recommends foods and quantities that together approach a nutrient target.
//!
//! The target is first scaled to its period. Then, for each nutrient in
//! [`GREEDY_DIMENSIONS`], the catalog is ranked by density for that nutrient
//! and walked greedily, sizing every pick to the remaining gap up to the
//! per-pick quantity cap. All passes share one set of running totals, so a
//! food picked for protein also counts toward iron and calories. A final pass
//! tops up calories. Repeated picks of one food are merged in the result.
//!
//! The algorithm is synchronous and bounded by the pick caps; every call owns
//! its own state.

/// Merging picks into the final recommendation
pub mod aggregator;
/// Period scaling of targets
pub mod normalizer;
/// Quantity sizing and contribution math
pub mod quantity;
/// Density ranking with random tie-breaking
pub mod ranking;
/// Greedy pass over a ranked list
pub mod selector;
/// Calorie top-up pass
pub mod top_up;

pub use aggregator::{aggregate_picks, Recommendation};
pub use normalizer::adjusted_target;
pub use selector::{Pick, SelectionState};

use crate::config::{ConfigError, PlannerConfig};
use nutri_core::models::{FoodProvider, FoodRecord, Nutrient, NutrientTarget};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ranking::rank_by_density;
use selector::{run_pass, PassLimits};
use tracing::{debug, info};

/// Nutrients with a dedicated greedy pass, in pass order
///
/// Calories are handled by the top-up pass. Sodium, potassium, magnesium and
/// phosphorus are tracked in totals only.
pub const GREEDY_DIMENSIONS: [Nutrient; 17] = [
    Nutrient::Protein,
    Nutrient::Fat,
    Nutrient::Carbs,
    Nutrient::Fiber,
    Nutrient::Calcium,
    Nutrient::Iron,
    Nutrient::Zinc,
    Nutrient::VitaminA,
    Nutrient::VitaminD,
    Nutrient::VitaminE,
    Nutrient::VitaminK,
    Nutrient::VitaminB1,
    Nutrient::VitaminB2,
    Nutrient::VitaminB6,
    Nutrient::VitaminB12,
    Nutrient::VitaminC,
    Nutrient::Folate,
];

/// Greedy food bundle planner
#[derive(Debug, Clone, Default)]
pub struct FoodPlanner {
    config: PlannerConfig,
}

impl FoodPlanner {
    /// Create a planner with validated limits
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `config` fails validation.
    pub fn new(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Planner limits in use
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Recommend foods for `target` from `foods`
    ///
    /// Ties in density are broken with a fresh entropy-seeded generator per
    /// call, or with the configured seed when one is set.
    #[must_use]
    pub fn recommend<'a>(
        &self,
        target: &NutrientTarget,
        foods: &'a [FoodRecord],
    ) -> Recommendation<'a> {
        let mut rng = self
            .config
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        self.recommend_with_rng(target, foods, &mut rng)
    }

    /// Recommend with an explicit seed, reproducible for a given catalog
    #[must_use]
    pub fn recommend_seeded<'a>(
        &self,
        target: &NutrientTarget,
        foods: &'a [FoodRecord],
        seed: u64,
    ) -> Recommendation<'a> {
        self.recommend_with_rng(target, foods, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Recommend from any [`FoodProvider`]
    #[must_use]
    pub fn recommend_from<'a, P: FoodProvider + ?Sized>(
        &self,
        target: &NutrientTarget,
        provider: &'a P,
    ) -> Recommendation<'a> {
        self.recommend(target, provider.list_foods())
    }

    /// Recommend using the supplied random source for tie-breaking
    #[must_use]
    pub fn recommend_with_rng<'a, R: Rng + ?Sized>(
        &self,
        target: &NutrientTarget,
        foods: &'a [FoodRecord],
        rng: &mut R,
    ) -> Recommendation<'a> {
        let adjusted = adjusted_target(target);
        let state = self.select_with_rng(target, foods, rng);

        let recommendation = Recommendation::from_picks(&state.picks, adjusted, target.period);
        info!(
            catalog_size = foods.len(),
            period = %target.period,
            picks = recommendation.pick_count,
            distinct_foods = recommendation.foods.len(),
            total_calories = recommendation.total_nutrition[Nutrient::Calories],
            "Food recommendation complete"
        );
        recommendation
    }

    /// Run every greedy pass and return the raw picks before aggregation
    ///
    /// Each entry of the returned `picks` is one selection event, so its
    /// quantity is bounded by the per-pick cap.
    #[must_use]
    pub fn select_with_rng<'a, R: Rng + ?Sized>(
        &self,
        target: &NutrientTarget,
        foods: &'a [FoodRecord],
        rng: &mut R,
    ) -> SelectionState<'a> {
        let adjusted = adjusted_target(target);
        let mut state = SelectionState::new();

        let nutrient_limits = PassLimits {
            max_picks: self.config.max_picks_per_nutrient,
            max_quantity: self.config.max_quantity_per_pick,
            revisit: self.config.revisit_candidates,
        };
        for nutrient in GREEDY_DIMENSIONS {
            if state.totals[nutrient] >= adjusted[nutrient] {
                continue;
            }
            let ranked = rank_by_density(foods, nutrient, rng);
            run_pass(&mut state, &ranked, nutrient, adjusted[nutrient], &nutrient_limits);
        }

        let top_up_limits = PassLimits {
            max_picks: self.config.max_calorie_top_up_picks,
            ..nutrient_limits
        };
        let top_up_picks = top_up::calorie_top_up(
            &mut state,
            foods,
            adjusted[Nutrient::Calories],
            &top_up_limits,
            rng,
        );
        debug!(
            nutrient_picks = state.picks.len() - top_up_picks,
            top_up_picks, "Greedy passes finished"
        );
        state
    }
}

/// Recommend foods for `target` with the default planner limits
#[must_use]
pub fn recommend<'a>(target: &NutrientTarget, foods: &'a [FoodRecord]) -> Recommendation<'a> {
    FoodPlanner::default().recommend(target, foods)
}
