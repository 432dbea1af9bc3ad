// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors
// ABOUTME: Recommendation command for nutri-cli
// ABOUTME: Builds a target from per-nutrient flags and runs the planner over the catalog

use anyhow::Result;
use clap::Args;
use nutri_core::models::{Nutrient, NutrientTarget, NutrientVector, Period};
use nutri_intelligence::{FoodPlanner, PlannerConfig};
use nutri_picker::catalog::FoodCatalog;
use nutri_picker::formatters::{format_recommendation, to_pretty_json, OutputFormat};
use tracing::info;

/// Per-nutrient target flags; amounts are per period instance
#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// Energy (kcal)
    #[arg(long)]
    calories: Option<f64>,
    /// Protein (g)
    #[arg(long)]
    protein: Option<f64>,
    /// Fat (g)
    #[arg(long)]
    fat: Option<f64>,
    /// Carbohydrates (g)
    #[arg(long)]
    carbs: Option<f64>,
    /// Dietary fiber (g)
    #[arg(long)]
    fiber: Option<f64>,
    /// Sodium (mg)
    #[arg(long)]
    sodium: Option<f64>,
    /// Potassium (mg)
    #[arg(long)]
    potassium: Option<f64>,
    /// Calcium (mg)
    #[arg(long)]
    calcium: Option<f64>,
    /// Magnesium (mg)
    #[arg(long)]
    magnesium: Option<f64>,
    /// Phosphorus (mg)
    #[arg(long)]
    phosphorus: Option<f64>,
    /// Iron (mg)
    #[arg(long)]
    iron: Option<f64>,
    /// Zinc (mg)
    #[arg(long)]
    zinc: Option<f64>,
    /// Vitamin A (μg RAE)
    #[arg(long)]
    vitamin_a: Option<f64>,
    /// Vitamin D (μg)
    #[arg(long)]
    vitamin_d: Option<f64>,
    /// Vitamin E (mg)
    #[arg(long)]
    vitamin_e: Option<f64>,
    /// Vitamin K (μg)
    #[arg(long)]
    vitamin_k: Option<f64>,
    /// Vitamin B1 (mg)
    #[arg(long)]
    vitamin_b1: Option<f64>,
    /// Vitamin B2 (mg)
    #[arg(long)]
    vitamin_b2: Option<f64>,
    /// Vitamin B6 (mg)
    #[arg(long)]
    vitamin_b6: Option<f64>,
    /// Vitamin B12 (μg)
    #[arg(long)]
    vitamin_b12: Option<f64>,
    /// Vitamin C (mg)
    #[arg(long)]
    vitamin_c: Option<f64>,
    /// Folate (μg)
    #[arg(long)]
    folate: Option<f64>,
}

impl TargetArgs {
    const fn overrides(&self) -> [(Nutrient, Option<f64>); Nutrient::COUNT] {
        [
            (Nutrient::Calories, self.calories),
            (Nutrient::Protein, self.protein),
            (Nutrient::Fat, self.fat),
            (Nutrient::Carbs, self.carbs),
            (Nutrient::Fiber, self.fiber),
            (Nutrient::Sodium, self.sodium),
            (Nutrient::Potassium, self.potassium),
            (Nutrient::Calcium, self.calcium),
            (Nutrient::Magnesium, self.magnesium),
            (Nutrient::Phosphorus, self.phosphorus),
            (Nutrient::Iron, self.iron),
            (Nutrient::Zinc, self.zinc),
            (Nutrient::VitaminA, self.vitamin_a),
            (Nutrient::VitaminD, self.vitamin_d),
            (Nutrient::VitaminE, self.vitamin_e),
            (Nutrient::VitaminK, self.vitamin_k),
            (Nutrient::VitaminB1, self.vitamin_b1),
            (Nutrient::VitaminB2, self.vitamin_b2),
            (Nutrient::VitaminB6, self.vitamin_b6),
            (Nutrient::VitaminB12, self.vitamin_b12),
            (Nutrient::VitaminC, self.vitamin_c),
            (Nutrient::Folate, self.folate),
        ]
    }

    /// Target from the flags, starting from the reference intake or from zero
    pub fn to_target(&self, period: Period, only_given: bool) -> NutrientTarget {
        let mut amounts = if only_given {
            NutrientVector::zero()
        } else {
            NutrientTarget::default().amounts
        };
        for (nutrient, amount) in self.overrides() {
            if let Some(amount) = amount {
                amounts[nutrient] = amount;
            }
        }
        NutrientTarget::new(amounts, period)
    }
}

/// Run the planner and render the result
pub fn run(
    catalog: &FoodCatalog,
    target_args: &TargetArgs,
    period: &str,
    seed: Option<u64>,
    only_given: bool,
    format: OutputFormat,
) -> Result<String> {
    let target = target_args.to_target(Period::from_str_lossy(period), only_given);
    let planner = FoodPlanner::new(PlannerConfig::from_env()?)?;

    let recommendation = match seed {
        Some(seed) => planner.recommend_seeded(&target, catalog.foods(), seed),
        None => planner.recommend(&target, catalog.foods()),
    };
    info!(
        foods = recommendation.foods.len(),
        picks = recommendation.pick_count,
        "Recommendation ready"
    );

    Ok(match format {
        OutputFormat::Text => format_recommendation(&recommendation),
        OutputFormat::Json => to_pretty_json(&recommendation)? + "\n",
    })
}
