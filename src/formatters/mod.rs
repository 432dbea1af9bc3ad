// ABOUTME: Output formatting for recommendations and food lists in text or JSON
// ABOUTME: Text rendering rounds amounts to whole numbers for display only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

//! Output Format Abstraction
//!
//! Recommendations are computed without rounding; rounding happens here,
//! when a result is rendered for people.

use nutri_core::models::{FoodRecord, Nutrient, NutrientVector};
use nutri_intelligence::Recommendation;
use serde::Serialize;
use std::fmt::{self, Write};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// JSON when `json` is set, text otherwise
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Serialize `data` as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn to_pretty_json<T: Serialize + ?Sized>(data: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

/// Round to a whole number for display
#[must_use]
pub fn whole(value: f64) -> String {
    format!("{:.0}", value.round())
}

/// Render a recommendation as a food list followed by a nutrient table
#[must_use]
pub fn format_recommendation(recommendation: &Recommendation<'_>) -> String {
    let mut out = String::new();

    if recommendation.is_empty() {
        out.push_str("No foods selected.\n");
    } else {
        let _ = writeln!(
            out,
            "Recommended foods ({} period, {} picks):",
            recommendation.period, recommendation.pick_count
        );
        for pick in &recommendation.foods {
            let _ = writeln!(
                out,
                "  {:<40} {:>6} g  [{}]",
                pick.food.name,
                whole(pick.quantity),
                pick.food.category
            );
        }
        let _ = writeln!(out, "  {:<40} {:>6} g", "Total", whole(recommendation.total_quantity()));
    }

    out.push('\n');
    out.push_str(&format_nutrient_table(
        &recommendation.total_nutrition,
        &recommendation.adjusted_target,
    ));
    out
}

/// Render totals against targets, one nutrient per line
#[must_use]
pub fn format_nutrient_table(totals: &NutrientVector, targets: &NutrientVector) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:>10} {:>10} {:>7}", "Nutrient", "Total", "Target", "%");
    for nutrient in Nutrient::ALL {
        let total = totals[nutrient];
        let target = targets[nutrient];
        let percent = if target > 0.0 {
            format!("{}%", whole(total / target * 100.0))
        } else {
            "-".to_owned()
        };
        let total_text = whole(total) + nutrient.unit();
        let target_text = whole(target) + nutrient.unit();
        let _ = writeln!(
            out,
            "{:<12} {total_text:>10} {target_text:>10} {percent:>7}",
            nutrient.wire_name()
        );
    }
    out
}

/// Render food records as one line each
#[must_use]
pub fn format_food_list(foods: &[&FoodRecord]) -> String {
    if foods.is_empty() {
        return "No foods found.\n".to_owned();
    }

    let mut out = String::new();
    for food in foods {
        let _ = writeln!(
            out,
            "{:<8} {:<40} {:<16} {:>5} kcal  P {:>3} g  F {:>3} g  C {:>3} g",
            food.food_id.as_deref().unwrap_or("-"),
            food.name,
            food.category,
            whole(food.density(Nutrient::Calories)),
            whole(food.density(Nutrient::Protein)),
            whole(food.density(Nutrient::Fat)),
            whole(food.density(Nutrient::Carbs)),
        );
    }
    let _ = writeln!(out, "{} foods", foods.len());
    out
}
